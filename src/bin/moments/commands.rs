//! Subcommand implementations.

use animemoments::{
    AnimeMomentPatch, Client, Criteria, NewAnimeMoment, NewComment, UserIdentity, ensure_demo_content,
    id::generate_id,
};
use anyhow::{Context, Result, bail};
use clap::Args;
use colored::Colorize;

use crate::output;

pub fn seed(client: &Client) -> Result<()> {
    let added = ensure_demo_content(client)?;
    if added == 0 {
        println!("{}", "Store already has moments; nothing to seed.".yellow());
    } else {
        println!("{} {added} sample moments", "Seeded".green().bold());
    }
    Ok(())
}

#[derive(Args)]
pub struct ListArgs {
    /// Sort key; prefix with `-` for descending
    #[arg(long, default_value = "-created_date")]
    sort: String,

    /// Only moments from this anime
    #[arg(long)]
    anime: Option<String>,

    /// Only moments carrying this tag
    #[arg(long)]
    tag: Option<String>,
}

pub fn list(client: &Client, args: ListArgs) -> Result<()> {
    let moments = match &args.anime {
        Some(anime) => {
            let criteria = Criteria::new().field("anime_name", anime.as_str());
            client.anime_moments().filter(&criteria, Some(&args.sort))?
        }
        None => client.anime_moments().list(Some(&args.sort))?,
    };
    let moments: Vec<_> = match &args.tag {
        Some(tag) => moments
            .into_iter()
            .filter(|moment| moment.tags.iter().any(|candidate| candidate == tag))
            .collect(),
        None => moments,
    };
    output::moments_table(&moments);
    Ok(())
}

pub fn show(client: &Client, id: &str) -> Result<()> {
    let Some(moment) = client.anime_moments().get(id)? else {
        bail!("no moment with id {id}");
    };
    let criteria = Criteria::new().field("moment_id", id);
    let comments = client.comments().filter(&criteria, Some("-created_date"))?;
    output::moment_detail(&moment, &comments);
    Ok(())
}

#[derive(Args)]
pub struct CreateArgs {
    #[arg(long)]
    title: String,

    /// Name of the anime
    #[arg(long)]
    anime: String,

    /// Why this moment is special
    #[arg(long)]
    description: String,

    /// Episode number or arc
    #[arg(long)]
    episode: Option<String>,

    /// Screenshot or image of the moment
    #[arg(long)]
    image_url: Option<String>,

    /// May be given multiple times
    #[arg(long = "tag")]
    tags: Vec<String>,
}

pub fn create(client: &Client, args: CreateArgs) -> Result<()> {
    let input = NewAnimeMoment {
        episode: args.episode,
        image_url: args.image_url,
        tags: args.tags,
        ..NewAnimeMoment::new(args.title, args.anime, args.description)
    };
    let moment = client.anime_moments().create(input)?;
    println!("{} {} ({})", "Created".green().bold(), moment.title, moment.id.dimmed());
    Ok(())
}

pub fn comment(client: &Client, moment_id: &str, content: String) -> Result<()> {
    require_login(client)?;
    if client.anime_moments().get(moment_id)?.is_none() {
        bail!("no moment with id {moment_id}");
    }
    let comment = client.comments().create(NewComment::new(moment_id, content))?;
    println!("{} comment {}", "Posted".green().bold(), comment.id.dimmed());
    Ok(())
}

pub fn like(client: &Client, moment_id: &str) -> Result<()> {
    let user = require_login(client)?;
    let moments = client.anime_moments();
    let Some(moment) = moments.get(moment_id)? else {
        bail!("no moment with id {moment_id}");
    };
    if moment.likes.iter().any(|email| email == &user.email) {
        println!("{}", "Already liked.".yellow());
        return Ok(());
    }
    let mut likes = moment.likes;
    likes.push(user.email);
    let updated = moments.update(moment_id, AnimeMomentPatch::likes(likes))?;
    println!(
        "{} {} now has {} likes",
        "Liked".green().bold(),
        updated.title,
        updated.likes.len()
    );
    Ok(())
}

pub fn unlike(client: &Client, moment_id: &str) -> Result<()> {
    let user = require_login(client)?;
    let moments = client.anime_moments();
    let Some(moment) = moments.get(moment_id)? else {
        bail!("no moment with id {moment_id}");
    };
    if !moment.likes.iter().any(|email| email == &user.email) {
        println!("{}", "Not liked yet.".yellow());
        return Ok(());
    }
    let likes: Vec<String> = moment.likes.into_iter().filter(|email| email != &user.email).collect();
    let updated = moments.update(moment_id, AnimeMomentPatch::likes(likes))?;
    println!(
        "{} {} now has {} likes",
        "Unliked".green().bold(),
        updated.title,
        updated.likes.len()
    );
    Ok(())
}

pub fn delete(client: &Client, id: &str) -> Result<()> {
    if !client.anime_moments().delete(id)? {
        bail!("no moment with id {id}");
    }
    let comments = client.comments();
    let criteria = Criteria::new().field("moment_id", id);
    let attached = comments.filter(&criteria, None)?;
    for comment in &attached {
        comments.delete(&comment.id)?;
    }
    println!(
        "{} moment {id} and {} comments",
        "Deleted".green().bold(),
        attached.len()
    );
    Ok(())
}

pub fn login(client: &Client, email: Option<String>, name: Option<String>) -> Result<()> {
    let identity = if email.is_none() && name.is_none() {
        client.auth().start()?
    } else {
        let demo = UserIdentity::demo();
        client.auth().start_with(UserIdentity {
            email: email.unwrap_or(demo.email),
            full_name: name.unwrap_or(demo.full_name),
            id: generate_id(),
        })?
    };
    println!(
        "{} {} <{}>",
        "Logged in as".green().bold(),
        identity.full_name,
        identity.email
    );
    Ok(())
}

pub fn logout(client: &Client) -> Result<()> {
    client.auth().end()?;
    println!("{}", "Logged out.".green());
    Ok(())
}

pub fn whoami(client: &Client) -> Result<()> {
    match client.auth().current_user() {
        Some(user) => println!("{} <{}>", user.full_name.bold(), user.email),
        None => println!("{}", "Not logged in.".yellow()),
    }
    Ok(())
}

fn require_login(client: &Client) -> Result<UserIdentity> {
    client
        .auth()
        .current_user()
        .context("not logged in (run `moments login` first)")
}
