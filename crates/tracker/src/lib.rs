use chrono::NaiveDate;
use core_model::{DateError, ElapsedBreakdown, Friend, format_contact_date, parse_contact_date};
use store_sqlite::FriendStore;

/// Outcome of an add: at most one record per name, enforced by the pre-check.
#[derive(Debug)]
pub enum AddOutcome {
    Added { name: String, date: String },
    AlreadyPresent { name: String },
}

impl AddOutcome {
    pub fn message(&self) -> String {
        match self {
            AddOutcome::Added { name, .. } => format!("Lagt til {name}."),
            AddOutcome::AlreadyPresent { name } => format!("{name} er allerede lagt til."),
        }
    }
}

pub fn add_friend(store: &FriendStore, name: &str, today: NaiveDate) -> anyhow::Result<AddOutcome> {
    if store.exists(name)? {
        return Ok(AddOutcome::AlreadyPresent {
            name: name.to_string(),
        });
    }
    let date = format_contact_date(today);
    store.insert(name, &date)?;
    Ok(AddOutcome::Added {
        name: name.to_string(),
        date,
    })
}

#[derive(Debug)]
pub struct ChangeDateOutcome {
    pub name: String,
    pub rows_affected: usize,
}

impl ChangeDateOutcome {
    /// Always reports success, even when no row matched.
    pub fn message(&self) -> String {
        format!("Oppdatert dato for {}.", self.name)
    }
}

/// Updates unconditionally: no existence pre-check, no format validation of
/// the new date string.
pub fn change_date(
    store: &FriendStore,
    name: &str,
    new_date: &str,
) -> anyhow::Result<ChangeDateOutcome> {
    let rows_affected = store.update_date(name, new_date)?;
    Ok(ChangeDateOutcome {
        name: name.to_string(),
        rows_affected,
    })
}

#[derive(Debug)]
pub enum ListOutcome {
    Empty,
    Entries(Vec<Friend>),
}

impl ListOutcome {
    pub fn message(&self) -> String {
        match self {
            ListOutcome::Empty => "Ingen venner er lagt til.".to_string(),
            ListOutcome::Entries(friends) => friends
                .iter()
                .map(|f| format!("Navn: {}, Siste kontakt: {}", f.name, f.last_contact))
                .collect::<Vec<_>>()
                .join("\n"),
        }
    }
}

pub fn list_friends(store: &FriendStore) -> anyhow::Result<ListOutcome> {
    let friends = store.list_all()?;
    if friends.is_empty() {
        Ok(ListOutcome::Empty)
    } else {
        Ok(ListOutcome::Entries(friends))
    }
}

#[derive(Debug)]
pub enum CheckOutcome {
    /// Elapsed-time message, appended to the running log.
    Elapsed { message: String },
    /// Surfaced as a blocking alert, not a log line.
    NotRegistered { name: String },
}

impl CheckOutcome {
    pub fn message(&self) -> String {
        match self {
            CheckOutcome::Elapsed { message } => message.clone(),
            CheckOutcome::NotRegistered { name } => format!("{name} er ikke registrert."),
        }
    }
}

pub fn check_contact(
    store: &FriendStore,
    name: &str,
    today: NaiveDate,
) -> anyhow::Result<CheckOutcome> {
    let Some(friend) = store.find_by_name(name)? else {
        return Ok(CheckOutcome::NotRegistered {
            name: name.to_string(),
        });
    };
    let message = time_since_message(&friend.name, &friend.last_contact, today)?;
    Ok(CheckOutcome::Elapsed { message })
}

#[derive(Debug)]
pub enum DeleteOutcome {
    Removed { name: String },
    NotRegistered { name: String },
}

impl DeleteOutcome {
    pub fn message(&self) -> String {
        match self {
            DeleteOutcome::Removed { name } => format!("Slettet venn {name}."),
            DeleteOutcome::NotRegistered { name } => format!("{name} er ikke registrert."),
        }
    }
}

pub fn delete_friend(store: &FriendStore, name: &str) -> anyhow::Result<DeleteOutcome> {
    let rows_affected = store.delete(name)?;
    if rows_affected > 0 {
        Ok(DeleteOutcome::Removed {
            name: name.to_string(),
        })
    } else {
        Ok(DeleteOutcome::NotRegistered {
            name: name.to_string(),
        })
    }
}

/// Human-readable time since last contact. Under a week the raw day count is
/// used as-is; a future stored date gives a negative count and lands in the
/// same branch unguarded. From a week up, the fixed breakdown applies and the
/// day component is always spelled out, so the phrase is never empty.
pub fn time_since_message(
    name: &str,
    stored: &str,
    today: NaiveDate,
) -> Result<String, DateError> {
    let parsed = parse_contact_date(stored)?;
    let total_days = (today - parsed).num_days();
    if total_days < 7 {
        return Ok(format!(
            "Det er {total_days} dager siden du snakket med {name} sist."
        ));
    }
    let b = ElapsedBreakdown::from_total_days(total_days);
    let mut parts = Vec::new();
    if b.years > 0 {
        parts.push(format!("{} år", b.years));
    }
    if b.months > 0 {
        parts.push(format!("{} måned(er)", b.months));
    }
    if b.weeks > 0 {
        parts.push(format!("{} uke(r)", b.weeks));
    }
    parts.push(format!("{} dag(er)", b.days));
    Ok(format!(
        "Det er {} siden sist du snakket med {name}.",
        parts.join(", ")
    ))
}
