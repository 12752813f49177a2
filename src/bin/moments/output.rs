//! Terminal rendering for listings and detail views.

use animemoments::{AnimeMoment, Comment};
use colored::Colorize;
use comfy_table::{Cell, ContentArrangement, Table, presets::UTF8_FULL};

pub fn moments_table(moments: &[AnimeMoment]) {
    if moments.is_empty() {
        println!("{}", "No moments yet. Try `moments seed` or `moments create`.".yellow());
        return;
    }
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(["ID", "Title", "Anime", "Episode", "Likes", "Posted"]);
    for moment in moments {
        table.add_row([
            Cell::new(&moment.id),
            Cell::new(&moment.title),
            Cell::new(&moment.anime_name),
            Cell::new(moment.episode.as_deref().unwrap_or("-")),
            Cell::new(moment.likes.len()),
            Cell::new(moment.created_date.format("%Y-%m-%d")),
        ]);
    }
    println!("{table}");
}

pub fn moment_detail(moment: &AnimeMoment, comments: &[Comment]) {
    println!("{}", moment.title.bold());
    match &moment.episode {
        Some(episode) => println!("{} · {episode}", moment.anime_name.cyan()),
        None => println!("{}", moment.anime_name.cyan()),
    }
    println!("{}", moment.created_date.format("%Y-%m-%d %H:%M UTC").to_string().dimmed());
    if let Some(image_url) = &moment.image_url {
        println!("{}", image_url.underline());
    }
    println!();
    println!("{}", moment.description);
    if !moment.tags.is_empty() {
        let tags: Vec<String> = moment.tags.iter().map(|tag| format!("#{tag}")).collect();
        println!("{}", tags.join(" ").dimmed());
    }
    println!();
    let likes = moment.likes.len();
    println!("{likes} {}", if likes == 1 { "like" } else { "likes" });

    println!();
    if comments.is_empty() {
        println!("{}", "No comments yet.".dimmed());
        return;
    }
    println!("{}", format!("Comments ({})", comments.len()).bold());
    for comment in comments {
        println!(
            "  {}  {}",
            comment.created_date.format("%Y-%m-%d").to_string().dimmed(),
            comment.content
        );
    }
}
