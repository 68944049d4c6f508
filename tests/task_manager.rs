use noc_console::ui::core::actions::{Action, DialogType};
use noc_console::ui::core::TaskManager;
use std::time::Duration;

#[tokio::test]
async fn test_spawned_request_reports_its_action() {
    let (mut manager, mut rx) = TaskManager::new();

    let first = manager.spawn_request("quit request", async { Action::Quit }, |_| Action::None);
    let second = manager.spawn_request("list terminals", async { Action::ListTerminals }, |_| Action::None);
    assert_ne!(first, second);
    assert_eq!(manager.task_count(), 2);

    let mut received = vec![rx.recv().await.unwrap(), rx.recv().await.unwrap()];
    received.sort_by_key(|action| matches!(action, Action::Quit));
    assert!(matches!(received[0], Action::ListTerminals));
    assert!(matches!(received[1], Action::Quit));

    tokio::time::sleep(Duration::from_millis(10)).await;
    let mut finished = manager.cleanup_finished_tasks();
    finished.sort();
    assert_eq!(finished, vec![first, second]);
    assert_eq!(manager.task_count(), 0);
}

#[tokio::test]
async fn test_cancel_all_tasks() {
    let (mut manager, mut rx) = TaskManager::new();

    manager.spawn_request(
        "slow request",
        async {
            tokio::time::sleep(Duration::from_secs(60)).await;
            Action::Quit
        },
        |_| Action::Quit,
    );
    assert_eq!(manager.task_count(), 1);

    manager.cancel_all_tasks();
    assert_eq!(manager.task_count(), 0);

    tokio::time::sleep(Duration::from_millis(10)).await;
    assert!(rx.try_recv().is_err());
}

#[tokio::test]
async fn test_unfinished_tasks_are_kept() {
    let (mut manager, _rx) = TaskManager::new();

    manager.spawn_request(
        "slow request",
        async {
            tokio::time::sleep(Duration::from_secs(60)).await;
            Action::None
        },
        |_| Action::None,
    );

    assert!(manager.cleanup_finished_tasks().is_empty());
    assert_eq!(manager.task_count(), 1);
}

#[tokio::test]
async fn test_panicking_request_reports_failure_action() {
    let (mut manager, mut rx) = TaskManager::new();

    let id = manager.spawn_request(
        "broken request",
        async {
            if true {
                panic!("request blew up");
            }
            Action::Quit
        },
        |detail| Action::ShowDialog(DialogType::Error(detail)),
    );

    let action = tokio::time::timeout(Duration::from_secs(5), rx.recv()).await.unwrap().unwrap();
    match action {
        Action::ShowDialog(DialogType::Error(detail)) => assert!(detail.contains("panic"), "got {}", detail),
        other => panic!("unexpected action {:?}", other),
    }

    tokio::time::sleep(Duration::from_millis(10)).await;
    assert_eq!(manager.cleanup_finished_tasks(), vec![id]);
    assert_eq!(manager.task_count(), 0);
}
