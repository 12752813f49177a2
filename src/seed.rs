//! Demo content for an empty store.
//!
//! A fresh install shows a small catalog of well-known scenes instead of an
//! empty feed. Seeding writes complete documents with staggered creation
//! timestamps (one day apart, newest first in the catalog below) so the
//! default feed ordering has something to show.

use chrono::{Duration, Utc};

use crate::client::Client;
use crate::errors::RepoError;
use crate::id::generate_id;
use crate::models::AnimeMoment;

struct SampleMoment {
    title: &'static str,
    anime_name: &'static str,
    episode: &'static str,
    description: &'static str,
    image_url: &'static str,
    likes: &'static [&'static str],
    tags: &'static [&'static str],
}

const SAMPLE_MOMENTS: &[SampleMoment] = &[
    SampleMoment {
        title: "Luffy's Gear Fifth Awakening",
        anime_name: "One Piece",
        episode: "Episode 1071",
        description: "The most epic transformation in anime history! Luffy awakens his Devil Fruit and turns into the Sun God Nika. The animation, the laughter, the pure joy - everything about this moment was perfect!",
        image_url: "https://images.unsplash.com/photo-1578632767115-351597cf2477?w=800&h=600&fit=crop",
        likes: &["demo@animemoments.com", "sakura_fan@anime.com", "otaku_master@mail.com"],
        tags: &["epic", "transformation", "one-piece"],
    },
    SampleMoment {
        title: "Gojo vs Sukuna Domain Clash",
        anime_name: "Jujutsu Kaisen",
        episode: "Season 2 Episode 9",
        description: "The most visually stunning fight in modern anime! Two of the strongest sorcerers clashing their domains. The cinematography and animation were absolutely breathtaking.",
        image_url: "https://images.unsplash.com/photo-1613376023733-0a73315d9b06?w=800&h=600&fit=crop",
        likes: &["demo@animemoments.com", "anime_lover99@gmail.com"],
        tags: &["action", "jujutsu-kaisen", "fight"],
    },
    SampleMoment {
        title: "Tanjiro's Hinokami Kagura",
        anime_name: "Demon Slayer",
        episode: "Season 1 Episode 19",
        description: "The episode that broke the internet! Tanjiro unlocks his father's technique and saves the day. The animation quality was insane, especially the fire dance sequence.",
        image_url: "https://images.unsplash.com/photo-1607604276583-eef5d076aa5f?w=800&h=600&fit=crop",
        likes: &["naruto_fan@email.com", "weeb_life@anime.com"],
        tags: &["demon-slayer", "epic", "animation"],
    },
    SampleMoment {
        title: "Eren's Declaration of War",
        anime_name: "Attack on Titan",
        episode: "Season 4 Episode 5",
        description: "The moment everything changed. Eren's transformation in Liberio was chilling. The way the episode built up tension and then BOOM! Absolutely masterful storytelling.",
        image_url: "https://images.unsplash.com/photo-1609743522653-52354461eb27?w=800&h=600&fit=crop",
        likes: &["titan_slayer@email.com", "freedom_fighter@anime.com", "manga_reader@mail.com"],
        tags: &["attack-on-titan", "intense", "plot-twist"],
    },
    SampleMoment {
        title: "Naruto vs Pain - Talk No Jutsu Peak",
        anime_name: "Naruto Shippuden",
        episode: "Episode 166-167",
        description: "Not just an epic fight, but Naruto's ideology clash with Pain. When Naruto chose to break the cycle of hatred, that was TRUE shinobi. Believe it!",
        image_url: "https://images.unsplash.com/photo-1578662996442-48f60103fc96?w=800&h=600&fit=crop",
        likes: &["hokage_dreams@anime.com", "ramen_lover@mail.com", "hidden_leaf@email.com"],
        tags: &["naruto", "philosophy", "emotional", "epic-fight"],
    },
    SampleMoment {
        title: "Saitama vs Boros",
        anime_name: "One Punch Man",
        episode: "Episode 12",
        description: "The animation quality was OUT OF THIS WORLD! Boros gave Saitama the closest thing to a real fight. That Serious Punch at the end... absolutely legendary!",
        image_url: "https://images.unsplash.com/photo-1601645191163-3fc0d5d64e35?w=800&h=600&fit=crop",
        likes: &["bald_hero@anime.com", "one_punch@mail.com"],
        tags: &["one-punch-man", "action", "comedy", "overpowered"],
    },
    SampleMoment {
        title: "Violet Evergarden's Letter to Her Mother",
        anime_name: "Violet Evergarden",
        episode: "Episode 10",
        description: "I'm not crying, you're crying! The letters to Ann were devastating. KyoAni really knows how to destroy you emotionally while making it beautiful.",
        image_url: "https://images.unsplash.com/photo-1544947950-fa07a98d237f?w=800&h=600&fit=crop",
        likes: &["kyoani_forever@anime.com", "tissues_ready@mail.com", "demo@animemoments.com"],
        tags: &["violet-evergarden", "emotional", "tear-jerker", "kyoani"],
    },
    SampleMoment {
        title: "Spike's Final Showdown",
        anime_name: "Cowboy Bebop",
        episode: "Episode 26",
        description: "Bang. Just... bang. Spike's journey ending with that smile. Peak storytelling, peak animation, peak everything. This is why Bebop is timeless.",
        image_url: "https://images.unsplash.com/photo-1579546929662-711aa81148cf?w=800&h=600&fit=crop",
        likes: &["space_cowboy@anime.com", "jazz_lover@mail.com", "classic_anime@gmail.com"],
        tags: &["cowboy-bebop", "classic", "bittersweet", "masterpiece"],
    },
];

/// Seeds the sample catalog into an empty store. Does nothing when any
/// moments already exist. Returns the number of documents added.
pub fn ensure_demo_content(client: &Client) -> Result<usize, RepoError> {
    let store = client.store();
    if !store.borrow().data().anime_moments.is_empty() {
        return Ok(0);
    }

    let now = Utc::now();
    let mut store = store.borrow_mut();
    // Oldest first, so creation timestamps stay non-decreasing with
    // insertion order.
    for (age_days, sample) in SAMPLE_MOMENTS.iter().enumerate().rev() {
        let moment = AnimeMoment {
            id: generate_id(),
            created_date: now - Duration::days(age_days as i64 + 1),
            title: sample.title.to_string(),
            anime_name: sample.anime_name.to_string(),
            episode: Some(sample.episode.to_string()),
            description: sample.description.to_string(),
            image_url: Some(sample.image_url.to_string()),
            likes: sample.likes.iter().map(|email| email.to_string()).collect(),
            tags: sample.tags.iter().map(|tag| tag.to_string()).collect(),
        };
        store.data_mut().anime_moments.push(moment);
    }
    store.save()?;
    log::debug!("seeded {} sample moments", SAMPLE_MOMENTS.len());
    Ok(SAMPLE_MOMENTS.len())
}
