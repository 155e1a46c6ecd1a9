use wordserv_core::{Corpus, Limits, Sampler};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    // Load every file of the directory given as first argument ("./books" by default)
    // Each file is one book, split into chapters by "[CHAPTER]" lines
    let dir = std::env::args().nth(1).unwrap_or_else(|| "./books".to_owned());
    let corpus = Corpus::load(&dir)?;
    println!("Loaded {} books from {}", corpus.len(), dir);

    // Ceilings applied to every request, whatever count is asked for
    let limits = Limits::new(40, 3, 1);
    let sampler = Sampler::new(corpus, limits);

    // Chapters are capped at 1 here, so asking for 5 returns a single chapter
    let chapters = sampler.select_chapters(5);
    println!("Chapter run: {} chapter(s)", chapters.len());
    for chapter in chapters {
        println!("  {} paragraph(s)", chapter.len());
    }

    // Paragraph runs may cross chapter boundaries
    for (i, paragraph) in sampler.select_paragraphs(2).iter().enumerate() {
        println!("Paragraph {}: {}", i + 1, paragraph.join(" "));
    }

    // Word runs keep punctuation, only words count towards the request
    println!("Words: {}", sampler.select_words(12).join(" "));

    // Zero is a valid request and returns nothing
    assert!(sampler.select_words(0).is_empty());

    Ok(())
}
