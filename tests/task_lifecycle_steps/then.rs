//! Then steps for task lifecycle BDD scenarios.

use super::world::LifecycleWorld;
use rewardboard::board::{domain::CompletionStatus, services::LifecycleBucket};
use rstest_bdd_macros::then;

#[then(r#"task "{title}" is in the "{bucket}" bucket"#)]
fn task_is_in_bucket(
    world: &LifecycleWorld,
    title: String,
    bucket: String,
) -> Result<(), eyre::Report> {
    let expected = LifecycleBucket::try_from(bucket.as_str())?;
    let item = world.item(&title)?;

    if item.bucket() != expected {
        return Err(eyre::eyre!(
            "expected task {title} in {}, found {}",
            expected.as_str(),
            item.bucket().as_str()
        ));
    }

    Ok(())
}

#[then(r#"task "{title}" is displayed as "{status}""#)]
fn task_is_displayed_as(
    world: &LifecycleWorld,
    title: String,
    status: String,
) -> Result<(), eyre::Report> {
    let expected = CompletionStatus::try_from(status.as_str())?;
    let item = world.item(&title)?;

    if item.completion_status() != Some(expected) {
        return Err(eyre::eyre!(
            "expected task {title} displayed as {}, found {:?}",
            expected.as_str(),
            item.completion_status()
        ));
    }

    Ok(())
}

#[then(r#"the "{bucket}" bucket holds {count:usize} tasks"#)]
fn bucket_holds(world: &LifecycleWorld, bucket: String, count: usize) -> Result<(), eyre::Report> {
    let view = world
        .view
        .as_ref()
        .ok_or_else(|| eyre::eyre!("board has not been categorized"))?;
    let found = match LifecycleBucket::try_from(bucket.as_str())? {
        LifecycleBucket::Active => view.active().len(),
        LifecycleBucket::PendingReview => view.pending().len(),
        LifecycleBucket::Completed => view.completed().len(),
        LifecycleBucket::Missed => view.missed().len(),
    };

    if found != count {
        return Err(eyre::eyre!("expected {count} {bucket} tasks, found {found}"));
    }

    Ok(())
}

#[then(r#"the "{bucket}" bucket lists "{titles}" in order"#)]
fn bucket_lists_in_order(
    world: &LifecycleWorld,
    bucket: String,
    titles: String,
) -> Result<(), eyre::Report> {
    let view = world
        .view
        .as_ref()
        .ok_or_else(|| eyre::eyre!("board has not been categorized"))?;
    let items: Vec<_> = match LifecycleBucket::try_from(bucket.as_str())? {
        LifecycleBucket::Active => view.active().iter().collect(),
        LifecycleBucket::PendingReview => view.pending().iter().collect(),
        LifecycleBucket::Completed => view.completed().iter().collect(),
        LifecycleBucket::Missed => view.missed().iter().collect(),
    };
    let found: Vec<_> = items.iter().map(|item| item.task().title()).collect();
    let expected: Vec<_> = titles.split(',').map(str::trim).collect();

    if found != expected {
        return Err(eyre::eyre!("expected {bucket} order {expected:?}, found {found:?}"));
    }

    Ok(())
}
