//! Given steps for task lifecycle BDD scenarios.

use super::world::LifecycleWorld;
use rewardboard::board::{
    adapters::clock::FixedClock,
    domain::{Completion, CompletionStatus, NewTask, Task, TaskKind, UserId},
};
use rstest_bdd_macros::given;

fn seed_task(world: &mut LifecycleWorld, request: NewTask) -> Result<(), eyre::Report> {
    let task = Task::create(request, &FixedClock::new(world.hours_ago(24 * 7)))?;
    world.tasks.push(task);
    Ok(())
}

#[given(r#"a task "{title}" worth {points:u32} points"#)]
fn open_task(world: &mut LifecycleWorld, title: String, points: u32) -> Result<(), eyre::Report> {
    seed_task(world, NewTask::new(title, points, TaskKind::Custom))
}

#[given(r#"an expired task "{title}" worth {points:u32} points that lapsed {hours:i64}h ago"#)]
fn expired_task(
    world: &mut LifecycleWorld,
    title: String,
    points: u32,
    hours: i64,
) -> Result<(), eyre::Report> {
    let expires_at = world.hours_ago(hours);
    seed_task(
        world,
        NewTask::new(title, points, TaskKind::Custom).with_expires_at(expires_at),
    )
}

#[given(r#"task "{title}" was submitted {hours:i64} hours ago with status "{status}""#)]
fn submitted_task(
    world: &mut LifecycleWorld,
    title: String,
    hours: i64,
    status: String,
) -> Result<(), eyre::Report> {
    let status = CompletionStatus::try_from(status.as_str())?;
    let task_id = world.task(&title)?.id();
    let submitted_at = FixedClock::new(world.hours_ago(hours));
    world
        .completions
        .push(Completion::submit(task_id, UserId::new(), &submitted_at).with_status(status));
    Ok(())
}

#[given(r#"the submission of task "{title}" was marked missed"#)]
fn submission_marked_missed(
    world: &mut LifecycleWorld,
    title: String,
) -> Result<(), eyre::Report> {
    let task_id = world.task(&title)?.id();
    let missed_at = world.now;
    let position = world
        .completions
        .iter()
        .position(|completion| completion.task_id() == task_id)
        .ok_or_else(|| eyre::eyre!("task {title} has no submission to mark"))?;
    let marked = world.completions.remove(position).with_missed_at(missed_at);
    world.completions.push(marked);
    Ok(())
}
