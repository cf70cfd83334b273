use habitrack_habit::{Command, CreateInput, Frequency, Query};
use habitrack_shared::Error;
use temp_dir::TempDir;
use time::macros::date;

mod helpers;

#[tokio::test]
async fn test_create_and_find() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let state = helpers::setup_test_state(dir.child("db.sqlite3")).await?;
    let command = Command(state.clone());
    let query = Query(state.clone());

    let id = command
        .create(CreateInput {
            name: "  Pay rent  ".to_owned(),
            frequency: Frequency::Monthly,
            added: date!(2024 - 01 - 31),
        })
        .await?;

    let habit = query.find(&id).await?.unwrap();
    assert_eq!(habit.name, "Pay rent");
    assert_eq!(habit.frequency, Frequency::Monthly);
    assert_eq!(habit.added, date!(2024 - 01 - 31));

    assert_eq!(query.agenda(date!(2024 - 03 - 31)).await?.items.len(), 1);
    assert!(query.agenda(date!(2024 - 02 - 15)).await?.items.is_empty());
    assert!(query.agenda(date!(2024 - 04 - 30)).await?.items.is_empty());

    assert!(query.find("missing").await?.is_none());

    Ok(())
}

#[tokio::test]
async fn test_create_rejects_blank_or_long_names() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let state = helpers::setup_test_state(dir.child("db.sqlite3")).await?;
    let command = Command(state.clone());

    let long = "x".repeat(101);

    for name in ["", "   ", long.as_str()] {
        let result = command
            .create(CreateInput {
                name: name.to_owned(),
                frequency: Frequency::Daily,
                added: date!(2024 - 01 - 01),
            })
            .await;

        assert!(matches!(result, Err(Error::Validate(_))), "{name:?}");
    }

    assert!(Query(state).all().await?.is_empty());

    Ok(())
}

#[tokio::test]
async fn test_listing_follows_insertion_order() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let state = helpers::setup_test_state(dir.child("db.sqlite3")).await?;
    let command = Command(state.clone());
    let query = Query(state.clone());
    // Monday
    let added = date!(2024 - 06 - 03);

    let names = [
        ("Desk stretch", Frequency::Weekdays),
        ("Water plants", Frequency::Weekly),
        ("Drink water", Frequency::Daily),
        ("Budget", Frequency::Monthly),
        ("Read", Frequency::Daily),
        ("Standup notes", Frequency::Weekdays),
    ];

    for (name, frequency) in names {
        helpers::create_habit(&command, name, frequency, added).await?;
    }

    let all = query
        .all()
        .await?
        .into_iter()
        .map(|h| h.name)
        .collect::<Vec<_>>();
    assert_eq!(
        all,
        vec![
            "Desk stretch",
            "Water plants",
            "Drink water",
            "Budget",
            "Read",
            "Standup notes"
        ]
    );

    let agenda = query
        .agenda(added)
        .await?
        .items
        .into_iter()
        .map(|item| item.habit.name)
        .collect::<Vec<_>>();
    assert_eq!(
        agenda,
        vec![
            "Drink water",
            "Read",
            "Water plants",
            "Budget",
            "Desk stretch",
            "Standup notes"
        ]
    );

    Ok(())
}

#[tokio::test]
async fn test_added_until_excludes_future_habits() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let state = helpers::setup_test_state(dir.child("db.sqlite3")).await?;
    let command = Command(state.clone());
    let query = Query(state.clone());

    helpers::create_habit(&command, "Old", Frequency::Daily, date!(2024 - 01 - 01)).await?;
    helpers::create_habit(&command, "New", Frequency::Daily, date!(2024 - 06 - 15)).await?;

    assert_eq!(query.added_until(date!(2024 - 06 - 14)).await?.len(), 1);
    assert_eq!(query.added_until(date!(2024 - 06 - 15)).await?.len(), 2);
    assert_eq!(query.all().await?.len(), 2);

    Ok(())
}

#[tokio::test]
async fn test_delete_removes_habit_and_its_completions() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let state = helpers::setup_test_state(dir.child("db.sqlite3")).await?;
    let command = Command(state.clone());
    let query = Query(state.clone());

    let kept = helpers::create_habit(&command, "Keep", Frequency::Daily, date!(2024 - 01 - 01))
        .await?;
    let removed =
        helpers::create_habit(&command, "Remove", Frequency::Daily, date!(2024 - 01 - 01))
            .await?;

    command.toggle(&kept, date!(2024 - 06 - 15)).await?;
    command.toggle(&removed, date!(2024 - 06 - 15)).await?;
    command.toggle(&removed, date!(2024 - 06 - 16)).await?;
    assert_eq!(helpers::count_completions(&state).await?, 3);

    command.delete(&removed).await?;

    assert!(query.find(&removed).await?.is_none());
    assert_eq!(helpers::count_completions(&state).await?, 1);
    assert!(matches!(command.delete(&removed).await, Err(Error::NotFound)));

    Ok(())
}
