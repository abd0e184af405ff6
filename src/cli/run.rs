use crate::{
    cli::{
        command::{Cli, Commands},
        confirm_action, display_contact, display_contacts_list, display_stats,
        menu::run_menu,
    },
    domain::{ContactDraft, ContactManager, ContactUpdate},
    errors::AppError,
    logging,
    store::{StorageMediums, parse_storage_type},
    web::{self, ServerConfig},
};
use clap::Parser;
use dotenv::dotenv;
use std::io;
use tracing::debug;

pub fn run_app() -> Result<(), AppError> {
    dotenv().ok();
    let cli = Cli::parse();
    logging::init_logging_default();

    let medium = StorageMediums::from(&cli.storage_choice)?;
    let mut manager = ContactManager::new(parse_storage_type(medium, Some(cli.data_file.clone())));

    debug!(
        medium = medium.is_which(),
        contacts = manager.len(),
        "contact storage loaded"
    );

    match cli.command {
        Commands::Add {
            name,
            email,
            phone,
            address,
            company,
            notes,
        } => {
            let draft = ContactDraft::new(name)
                .email(email.unwrap_or_default())
                .phone(phone.unwrap_or_default())
                .address(address.unwrap_or_default())
                .company(company.unwrap_or_default())
                .notes(notes.unwrap_or_default());

            let contact = manager.add_contact(draft)?;

            println!("Contact added successfully! ID: {}", contact.id);
            Ok(())
        }

        // Listing contacts
        Commands::List => {
            println!(
                "{}",
                display_contacts_list(&manager.list_contacts(), "All Contacts")
            );
            Ok(())
        }

        Commands::Search { query } => {
            let query = query.trim();
            let (contacts, title) = if query.is_empty() {
                (manager.list_contacts(), "All Contacts".to_string())
            } else {
                (
                    manager.search_contacts(query),
                    format!("Search Results for '{query}'"),
                )
            };

            println!("{}", display_contacts_list(&contacts, &title));
            Ok(())
        }

        // Edit Contact
        Commands::Edit {
            id,
            name,
            email,
            phone,
            address,
            company,
            notes,
        } => {
            let update = ContactUpdate {
                name,
                email,
                phone,
                address,
                company,
                notes,
            };

            if update.is_empty() {
                return Err(AppError::Validation(
                    "Provide at least one field to update. See help".to_string(),
                ));
            }

            match manager.update_contact(id, update)? {
                Some(_) => println!("Contact updated successfully"),
                None => eprintln!("{}", AppError::NotFound("Contact".to_string())),
            }
            Ok(())
        }

        // Delete Contact
        Commands::Delete { id, yes } => {
            let Some(contact) = manager.get_contact(id) else {
                eprintln!("{}", AppError::NotFound("Contact".to_string()));
                return Ok(());
            };

            if !yes {
                let action = format!("delete '{}'", contact.name);
                let confirmed = confirm_action(&mut io::stdin().lock(), &mut io::stdout(), &action)?;
                if !confirmed {
                    println!("Deletion cancelled.");
                    return Ok(());
                }
            }

            if manager.delete_contact(id)? {
                println!("Contact deleted successfully");
            }
            Ok(())
        }

        Commands::View { id } => {
            match manager.get_contact(id) {
                Some(contact) => println!("{}", display_contact(contact, true)),
                None => eprintln!("{}", AppError::NotFound("Contact".to_string())),
            }
            Ok(())
        }

        Commands::Stats => {
            println!("{}", display_stats(&manager.get_stats()));
            Ok(())
        }

        Commands::Export { format, des } => {
            let dir = des.unwrap_or(cli.export_dir);
            let path = manager.export_to_file(&format, &dir)?;

            println!(
                "Successfully exported {} contacts to {:?}.",
                manager.len(),
                path
            );
            Ok(())
        }

        Commands::Menu => run_menu(
            &mut manager,
            &cli.export_dir,
            &mut io::stdin().lock(),
            &mut io::stdout(),
        ),

        Commands::Serve { host, port } => {
            let config = ServerConfig {
                host,
                port,
                export_dir: cli.export_dir,
            };

            tokio::runtime::Builder::new_multi_thread()
                .enable_all()
                .build()?
                .block_on(web::run(manager, config))
        }
    }
}
