use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use persons_service::Person;
use reqwest::Url;

#[derive(Parser)]
#[command(name = "persons-cli")]
#[command(about = "Command-line client for the persons service", long_about = None)]
struct Cli {
    #[arg(short, long, default_value = "http://localhost:8080")]
    url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Store the person described in a JSON file
    Save { file: PathBuf },
    /// List every stored person
    FindAll,
    /// Look up a person by identification
    FindById { identification: String },
    /// Replace a person with the one described in a JSON file
    UpdateById {
        identification: String,
        file: PathBuf,
    },
    /// Remove a person
    DeleteById { identification: String },
    /// List a person's house addresses
    HouseAddresses { identification: String },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();
    let base = Url::parse(&cli.url)?;

    let res = match cli.command {
        Commands::Save { file } => {
            let person = read_person(&file)?;
            client
                .post(endpoint(&base, &["save"])?)
                .json(&person)
                .send()
                .await?
        }
        Commands::FindAll => client.get(endpoint(&base, &["findAll"])?).send().await?,
        Commands::FindById { identification } => {
            client
                .get(endpoint(&base, &["findById", identification.as_str()])?)
                .send()
                .await?
        }
        Commands::UpdateById {
            identification,
            file,
        } => {
            let person = read_person(&file)?;
            client
                .put(endpoint(&base, &["updateById", identification.as_str()])?)
                .json(&person)
                .send()
                .await?
        }
        Commands::DeleteById { identification } => {
            client
                .delete(endpoint(&base, &["deleteById", identification.as_str()])?)
                .send()
                .await?
        }
        Commands::HouseAddresses { identification } => {
            client
                .get(endpoint(&base, &["address", "house", identification.as_str()])?)
                .send()
                .await?
        }
    };

    print_response(res).await
}

/// URL of an API operation under `base`.
///
/// Each segment is percent-encoded, so identifications containing `/`,
/// `?` or `#` stay a single path segment.
fn endpoint(base: &Url, segments: &[&str]) -> Result<Url, Box<dyn std::error::Error>> {
    let mut url = base.clone();
    url.path_segments_mut()
        .map_err(|_| format!("{base} cannot be used as a base URL"))?
        .pop_if_empty()
        .extend(["persons", "v1"])
        .extend(segments);
    Ok(url)
}

fn read_person(path: &Path) -> Result<Person, Box<dyn std::error::Error>> {
    let content = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

async fn print_response(res: reqwest::Response) -> Result<(), Box<dyn std::error::Error>> {
    let status = res.status();
    let text = res.text().await?;

    if !status.is_success() {
        eprintln!("Error: service returned status {}", status);
        if !text.is_empty() {
            eprintln!("{}", text);
        }
        std::process::exit(1);
    }

    if text.is_empty() {
        println!("(empty body)");
    } else if let Ok(json) = serde_json::from_str::<serde_json::Value>(&text) {
        println!("{}", serde_json::to_string_pretty(&json)?);
    } else {
        println!("{}", text);
    }
    Ok(())
}
