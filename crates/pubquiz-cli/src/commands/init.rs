//! The `pubquiz init` command.

use anyhow::Result;

pub fn execute() -> Result<()> {
    if std::path::Path::new("questions.csv").exists() {
        println!("questions.csv already exists, skipping.");
    } else {
        std::fs::write("questions.csv", SAMPLE_QUESTIONS)?;
        println!("Created questions.csv");
    }

    println!("\nNext steps:");
    println!("  1. Add your own questions to questions.csv");
    println!("  2. Run: pubquiz validate");
    println!("  3. Run: pubquiz play");

    Ok(())
}

const SAMPLE_QUESTIONS: &str = "\
question_text,answer_text,source
What is the capital of France?,Paris,pub
Which planet is known as the Red Planet?,Mars,pub
Who wrote the novel Moby-Dick?,Herman Melville,pub
What is the chemical symbol for gold?,Au,pub
Which band recorded the album Abbey Road?,The Beatles,pub
What is the largest ocean on Earth?,Pacific Ocean,pub
In which year did the Berlin Wall fall?,1989,online
Who painted the Mona Lisa?,Leonardo da Vinci,online
What is the tallest mountain on Earth?,Mount Everest,online
Which element has the atomic number 1?,Hydrogen,online
Who directed the film Jaws?,Steven Spielberg,online
What genre of music is Johnny Cash known for?,Country & Western,online
";
