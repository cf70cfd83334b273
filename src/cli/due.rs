use anyhow::Result;
use habitrack_habit::Agenda;

/// Prints the agenda of one day to stdout
#[tracing::instrument(skip(config))]
pub async fn due(config: crate::config::Config, date: Option<String>) -> Result<()> {
    let day = habitrack_shared::resolve_day(date.as_deref(), &config.app.timezone)?;

    let pool = crate::db::create_pool(&config.database.url, 1).await?;
    {
        let mut conn = pool.acquire().await?;
        habitrack_db::migrate(&mut conn).await?;
    }

    let query = habitrack_habit::Query(habitrack_shared::State {
        read_db: pool.clone(),
        write_db: pool.clone(),
    });
    let agenda = query.agenda(day).await?;

    print!("{}", render_agenda(&agenda));

    pool.close().await;

    Ok(())
}

fn render_agenda(agenda: &Agenda) -> String {
    let mut out = format!("{}\n", habitrack_shared::format_day(agenda.day));

    if agenda.items.is_empty() {
        out.push_str("  no habits due\n");
        return out;
    }

    for item in &agenda.items {
        let mark = if item.completed { "x" } else { " " };
        out.push_str(&format!(
            "  [{mark}] {} ({})\n",
            item.habit.name, item.habit.frequency
        ));
    }

    if agenda.all_completed {
        out.push_str("  all habits completed\n");
    } else {
        out.push_str(&format!(
            "  {}/{} completed\n",
            agenda.completed_count(),
            agenda.items.len()
        ));
    }

    out
}
