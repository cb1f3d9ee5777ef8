//! `pets` -- terminal front end for the pet catalog service.

use std::io::{self, Write};

use clap::{Args, Parser, Subcommand};
use petcatalog_client::api::{PetClient, DEFAULT_BASE_URL};
use petcatalog_client::ui::filter::PetFilter;
use petcatalog_client::ui::notify::{Level, Notification};
use petcatalog_client::ui::pages::{DashboardPage, PetDetailsPage, PetsPage};
use petcatalog_client::ui::render;
use petcatalog_core::pet::{Gender, PetFields, PetType};
use petcatalog_core::types::PetId;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[derive(Parser, Debug)]
#[command(name = "pets")]
#[command(about = "Browse and manage the pet adoption catalog", long_about = None)]
struct Cli {
    /// Base address of the pets API
    #[arg(long, global = true, env = "PETS_API_URL", default_value = DEFAULT_BASE_URL)]
    api_url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List pets, optionally filtered
    #[command(alias = "ls")]
    List {
        /// Case-insensitive text matched against name or description
        #[arg(short, long, default_value = "")]
        search: String,

        #[arg(short = 't', long = "type")]
        pet_type: Option<PetType>,

        #[arg(short, long)]
        gender: Option<Gender>,
    },

    /// Show one pet in full
    #[command(alias = "v")]
    Show { id: PetId },

    /// Admin table of every pet
    Dashboard,

    /// Add a new pet
    #[command(alias = "n")]
    Add(FieldArgs),

    /// Change fields of an existing pet
    Edit {
        id: PetId,

        #[command(flatten)]
        fields: FieldArgs,
    },

    /// Delete a pet
    #[command(alias = "rm")]
    Delete {
        id: PetId,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

/// Form inputs; values are sent as typed and checked by the service.
#[derive(Args, Debug, Default)]
struct FieldArgs {
    #[arg(long)]
    name: Option<String>,
    #[arg(long = "type")]
    pet_type: Option<String>,
    /// YYYY-MM-DD
    #[arg(long)]
    birthdate: Option<String>,
    #[arg(long)]
    gender: Option<String>,
    #[arg(long)]
    description: Option<String>,
    #[arg(long)]
    photo: Option<String>,
}

impl From<FieldArgs> for PetFields {
    fn from(args: FieldArgs) -> Self {
        PetFields {
            name: args.name,
            pet_type: args.pet_type,
            birthdate: args.birthdate,
            gender: args.gender,
            description: args.description,
            photo: args.photo,
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "petcatalog_client=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let cli = Cli::parse();
    let client = PetClient::new(cli.api_url);

    match cli.command {
        Commands::List {
            search,
            pet_type,
            gender,
        } => {
            let mut page = PetsPage::new();
            page.filter = PetFilter {
                search,
                pet_type,
                gender,
            };
            page.load(&client).await;
            finish(page.notification.as_ref())?;
            print!("{}", render::pets_page(&page));
        }

        Commands::Show { id } => {
            let mut page = PetDetailsPage::new(id);
            page.load(&client).await;
            print!("{}", render::pet_details(&page));
            finish(page.notification.as_ref())?;
        }

        Commands::Dashboard => {
            let mut page = DashboardPage::new();
            page.load(&client).await;
            finish(page.notification.as_ref())?;
            print!("{}", render::dashboard(&page));
        }

        Commands::Add(fields) => {
            let mut page = DashboardPage::new();
            page.open_create().apply(fields.into());
            page.submit_form(&client).await;
            finish(page.notification.as_ref())?;
            print!("{}", render::dashboard(&page));
        }

        Commands::Edit { id, fields } => {
            let mut page = DashboardPage::new();
            page.load(&client).await;
            finish(page.notification.as_ref())?;

            let Some(form) = page.open_edit(id) else {
                anyhow::bail!("Pet not found");
            };
            form.apply(fields.into());
            page.submit_form(&client).await;
            finish(page.notification.as_ref())?;
            print!("{}", render::dashboard(&page));
        }

        Commands::Delete { id, yes } => {
            if !yes && !confirm("Are you sure you want to delete this pet?")? {
                println!("Operation cancelled.");
                return Ok(());
            }

            let mut page = DashboardPage::new();
            page.delete(&client, id).await;
            finish(page.notification.as_ref())?;
            print!("{}", render::dashboard(&page));
        }
    }

    Ok(())
}

/// Print a success notification; turn an error notification into the
/// process error.
fn finish(notification: Option<&Notification>) -> anyhow::Result<()> {
    match notification {
        Some(n) if n.level == Level::Error => anyhow::bail!(n.message.clone()),
        Some(n) => {
            println!("{}", render::notification(n));
            Ok(())
        }
        None => Ok(()),
    }
}

fn confirm(question: &str) -> io::Result<bool> {
    print!("{question} [y/N]: ");
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;

    Ok(matches!(input.trim().to_lowercase().as_str(), "y" | "yes"))
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn list_filters_parse_case_insensitively() {
        let cli = Cli::parse_from(["pets", "list", "--type", "CAT", "-g", "female"]);
        match cli.command {
            Commands::List {
                pet_type, gender, ..
            } => {
                assert_eq!(pet_type, Some(PetType::Cat));
                assert_eq!(gender, Some(Gender::Female));
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn edit_collects_only_given_fields() {
        let cli = Cli::parse_from([
            "pets",
            "edit",
            "00000000-0000-0000-0000-000000000000",
            "--name",
            "Max",
        ]);
        let Commands::Edit { fields, .. } = cli.command else {
            panic!("expected edit");
        };
        let fields = PetFields::from(fields);
        assert_eq!(fields.name.as_deref(), Some("Max"));
        assert_eq!(fields.photo, None);
    }
}
