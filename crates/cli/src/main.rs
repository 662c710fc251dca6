use anyhow::Context;
use chrono::{Local, NaiveDate};
use clap::Parser;
use store_sqlite::FriendStore;
use tracing::info;

mod ui;

#[derive(Parser)]
#[command(name = "vennekontakt", version)]
#[command(about = "Holder oversikt over når du sist hadde kontakt med vennene dine")]
struct Cli {}

const GREETING: &str = "Hei!\n\nJeg hjelper deg med å holde oversikt over når du hadde kontakt med vennene dine sist.";

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();
    Cli::parse();

    info!("opening database");
    let store = FriendStore::open_default().with_context(|| "initializing friend store")?;
    store.init_schema().with_context(|| "creating friends table")?;

    let mut app = App {
        store,
        log: Vec::new(),
    };
    app.append(GREETING.to_string());
    app.run()
}

/// The single interface object: owns the store handle and the append-only
/// display log. Every action runs to completion before the next prompt.
struct App {
    store: FriendStore,
    log: Vec<String>,
}

impl App {
    fn run(&mut self) -> anyhow::Result<()> {
        loop {
            ui::print_menu();
            let choice = ui::prompt_line("> ")?;
            match choice.trim() {
                "1" => self.add()?,
                "2" => self.change_date()?,
                "3" => self.list()?,
                "4" => self.check()?,
                "5" => self.delete()?,
                "6" => {
                    info!("exiting");
                    break;
                }
                _ => {}
            }
        }
        // Store dropped here; the connection closes exactly once.
        Ok(())
    }

    fn append(&mut self, message: String) {
        println!("{message}");
        self.log.push(message);
    }

    fn today() -> NaiveDate {
        Local::now().date_naive()
    }

    fn add(&mut self) -> anyhow::Result<()> {
        let Some(name) = ui::prompt_nonempty("Navn på venn: ")? else {
            return Ok(());
        };
        let outcome = tracker::add_friend(&self.store, &name, Self::today())?;
        info!(name = %name, "add handled");
        self.append(outcome.message());
        Ok(())
    }

    fn change_date(&mut self) -> anyhow::Result<()> {
        let Some(name) = ui::prompt_nonempty("Navn på venn: ")? else {
            return Ok(());
        };
        let new_date = ui::prompt_line("Ny dato (DD.MM.YYYY): ")?;
        let outcome = tracker::change_date(&self.store, &name, &new_date)?;
        info!(name = %name, rows = outcome.rows_affected, "change date handled");
        self.append(outcome.message());
        Ok(())
    }

    fn list(&mut self) -> anyhow::Result<()> {
        let outcome = tracker::list_friends(&self.store)?;
        self.append(outcome.message());
        Ok(())
    }

    fn check(&mut self) -> anyhow::Result<()> {
        let Some(name) = ui::prompt_nonempty("Navn på venn som skal sjekkes: ")? else {
            return Ok(());
        };
        match tracker::check_contact(&self.store, &name, Self::today()) {
            Ok(outcome @ tracker::CheckOutcome::Elapsed { .. }) => self.append(outcome.message()),
            Ok(outcome @ tracker::CheckOutcome::NotRegistered { .. }) => {
                ui::alert(&outcome.message())?;
            }
            Err(err) => match err.downcast_ref::<core_model::DateError>() {
                Some(date_err) => self.append(format!("Feil: {date_err}")),
                None => return Err(err),
            },
        }
        Ok(())
    }

    fn delete(&mut self) -> anyhow::Result<()> {
        let Some(name) = ui::prompt_nonempty("Navn på venn som skal slettes: ")? else {
            return Ok(());
        };
        let outcome = tracker::delete_friend(&self.store, &name)?;
        info!(name = %name, "delete handled");
        self.append(outcome.message());
        Ok(())
    }
}
