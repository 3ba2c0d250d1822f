//! Integration tests for flat task feeds built through the board service.

use super::helpers::{Board, board, hours_ago, now};
use chrono::TimeDelta;
use rewardboard::board::{
    domain::{NewTask, TaskKind},
    services::{DisplayConfig, SortOrder, StatusFilter, TaskFilter},
};
use rstest::rstest;

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn feed_prefers_time_sensitive_and_urgent_tasks(board: Board) {
    board.assign(NewTask::new("Big reward", 400, TaskKind::Referral));
    board.assign(
        NewTask::new("Closing soon", 10, TaskKind::SocialRepost)
            .with_scheduled_deadline(now() + TimeDelta::minutes(20)),
    );
    board.assign(NewTask::new("Flash", 1, TaskKind::Custom).time_sensitive());

    let feed = board
        .service()
        .task_feed(board.user, &DisplayConfig::default())
        .await
        .expect("feed should build");

    let titles: Vec<_> = feed.visible().iter().map(|task| task.title()).collect();
    assert_eq!(titles, vec!["Flash", "Closing soon", "Big reward"]);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn feed_filters_out_expired_tasks(board: Board) {
    board.assign(NewTask::new("Live", 10, TaskKind::Custom));
    board.assign(NewTask::new("Gone", 10, TaskKind::Custom).with_expires_at(hours_ago(3)));
    let config = DisplayConfig::default()
        .sorted_by(SortOrder::Deadline)
        .filtered_by(TaskFilter {
            status: Some(StatusFilter::Active),
            ..TaskFilter::default()
        });

    let feed = board
        .service()
        .task_feed(board.user, &config)
        .await
        .expect("feed should build");

    let titles: Vec<_> = feed.visible().iter().map(|task| task.title()).collect();
    assert_eq!(titles, vec!["Live"]);
    assert_eq!(feed.total_count(), 1);
}
