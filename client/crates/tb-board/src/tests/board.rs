use crate::tests::{FakeGateway, Load, ticket};
use crate::{Board, BoardError, BoardState, NotificationLevel, Persisted, STATUS_UPDATE_FAILED};

use std::sync::Arc;

use googletest::prelude::*;
use tb_config::BoardConfig;
use tb_core::TicketStatus;
use tb_gateway::TicketScope;

fn config(rollback_on_failure: bool) -> BoardConfig {
    BoardConfig {
        rollback_on_failure,
    }
}

fn ids(board: &Board<FakeGateway>, status: TicketStatus) -> Vec<String> {
    let state = board.state();
    let snapshot = state.snapshot().expect("board should be ready");
    snapshot
        .column(status)
        .tickets
        .iter()
        .map(|t| t.id.clone())
        .collect()
}

async fn ready_board(
    gateway: FakeGateway,
    rollback: bool,
) -> (
    Board<FakeGateway>,
    Arc<FakeGateway>,
    tokio::sync::mpsc::UnboundedReceiver<crate::Notification>,
) {
    let gateway = Arc::new(gateway);
    let (mut board, notifications) = Board::new(gateway.clone(), &config(rollback));
    let state = board.load().await;
    assert!(matches!(state, BoardState::Ready(_)));
    (board, gateway, notifications)
}

fn two_todo_tickets() -> FakeGateway {
    FakeGateway::with_loads([Load::Tickets(vec![
        ticket("T1", "to_do"),
        ticket("T2", "to_do"),
        ticket("T3", "done"),
    ])])
}

// =============================================================================
// load / retry
// =============================================================================

#[tokio::test]
async fn given_tickets_when_load_then_partitioned_by_status() {
    // Given: tickets with mixed-case and unknown statuses
    let gateway = FakeGateway::with_loads([Load::Tickets(vec![
        ticket("A", "To_Do"),
        ticket("B", "DONE"),
        ticket("C", "blocked"),
        ticket("D", "in_progress"),
    ])]);

    // When
    let (board, _, _) = ready_board(gateway, false).await;

    // Then: unknown statuses land in open
    assert_that!(ids(&board, TicketStatus::ToDo), eq(&vec!["A".to_string()]));
    assert_that!(ids(&board, TicketStatus::Done), eq(&vec!["B".to_string()]));
    assert_that!(ids(&board, TicketStatus::Open), eq(&vec!["C".to_string()]));
    assert_that!(
        ids(&board, TicketStatus::InProgress),
        eq(&vec!["D".to_string()])
    );
}

#[tokio::test]
async fn given_failing_then_working_backend_when_retry_then_loading_failed_loading_ready() {
    // Given: first fetch fails, second returns one ticket
    let gateway = Arc::new(FakeGateway::with_loads([
        Load::Fail("Server exploded"),
        Load::Tickets(vec![ticket("T1", "done")]),
    ]));
    let (mut board, mut notifications) = Board::new(gateway.clone(), &config(false));
    gateway.observe(board.subscribe());

    // When
    let first = board.load().await;
    let second = board.retry().await;

    // Then: each fetch saw Loading, and the results are Failed then Ready
    let seen = gateway.seen_at_fetch.lock().unwrap().clone();
    assert_that!(seen, len(eq(2)));
    assert!(seen.iter().all(BoardState::is_loading));
    assert_that!(first.error_message(), some(eq("Server exploded")));

    let snapshot = second.snapshot().expect("ready after retry");
    assert_that!(snapshot.ticket_count(), eq(1));
    assert_that!(snapshot.column(TicketStatus::Done).tickets[0].id, eq("T1"));

    let note = notifications.try_recv().unwrap();
    assert_that!(note.level, eq(NotificationLevel::Error));
    assert_that!(note.message, eq("Server exploded"));
}

#[tokio::test]
async fn given_project_id_when_load_project_then_scope_switches() {
    let gateway = Arc::new(FakeGateway::with_loads([Load::Tickets(vec![ticket(
        "P1", "open",
    )])]));
    let (mut board, _) = Board::new(gateway.clone(), &config(false));

    board.load_project("p42").await;

    let expected = TicketScope::Project("p42".into());
    assert_eq!(board.scope(), &expected);
    assert_eq!(*gateway.scopes.lock().unwrap(), vec![expected]);
}

// =============================================================================
// move_ticket: no-ops and preconditions
// =============================================================================

#[tokio::test]
async fn given_same_column_and_index_when_move_then_identical_snapshot() {
    let (mut board, gateway, _) = ready_board(two_todo_tickets(), false).await;
    let before = board.state().snapshot().cloned().unwrap();

    let outcome = board
        .move_ticket("T1", "to_do", 0, Some("to_do"), 0)
        .unwrap();

    assert!(Arc::ptr_eq(&before, &outcome.snapshot));
    assert!(outcome.persistence.is_none());
    assert!(gateway.status_calls().is_empty());
}

#[tokio::test]
async fn given_cancelled_drag_when_move_then_identical_snapshot() {
    let (mut board, gateway, _) = ready_board(two_todo_tickets(), false).await;
    let before = board.state().snapshot().cloned().unwrap();

    let outcome = board.move_ticket("T1", "to_do", 0, None, 3).unwrap();

    assert!(Arc::ptr_eq(&before, &outcome.snapshot));
    assert!(gateway.status_calls().is_empty());
}

#[tokio::test]
async fn given_board_not_loaded_when_move_then_not_ready() {
    let (mut board, _) = Board::new(Arc::new(FakeGateway::default()), &config(false));

    let err = board
        .move_ticket("T1", "to_do", 0, Some("done"), 0)
        .unwrap_err();

    assert!(matches!(err, BoardError::NotReady { .. }));
}

#[tokio::test]
async fn given_unknown_destination_when_move_then_rejected_without_change() {
    let (mut board, _, _) = ready_board(two_todo_tickets(), false).await;

    let err = board
        .move_ticket("T1", "to_do", 0, Some("archived"), 0)
        .unwrap_err();

    assert!(matches!(err, BoardError::UnknownColumn { ref key, .. } if key == "archived"));
    assert_that!(ids(&board, TicketStatus::ToDo), len(eq(2)));
}

#[tokio::test]
async fn given_index_not_holding_ticket_when_move_then_rejected() {
    let (mut board, _, _) = ready_board(two_todo_tickets(), false).await;

    let err = board
        .move_ticket("T1", "to_do", 1, Some("done"), 0)
        .unwrap_err();

    assert!(matches!(err, BoardError::TicketNotAt { index: 1, .. }));
}

// =============================================================================
// move_ticket: optimistic update and persistence
// =============================================================================

#[tokio::test]
async fn given_cross_column_move_when_returned_then_visible_before_persistence() {
    let (mut board, gateway, _) = ready_board(two_todo_tickets(), false).await;

    // When: the move returns, the persistence task has not yet run
    let outcome = board
        .move_ticket("T1", "to_do", 0, Some("done"), 0)
        .unwrap();

    // Then: board already shows the move
    assert!(gateway.status_calls().is_empty());
    assert_that!(
        ids(&board, TicketStatus::Done),
        eq(&vec!["T1".to_string(), "T3".to_string()])
    );
    let moved = &outcome.snapshot.column(TicketStatus::Done).tickets[0];
    assert_that!(moved.status, eq("done"));

    let persisted = outcome.persistence.unwrap().await.unwrap();
    assert_that!(persisted, eq(&Persisted::Saved));
    assert_that!(
        gateway.status_calls(),
        eq(&vec![("T1".to_string(), TicketStatus::Done)])
    );
}

#[tokio::test]
async fn given_successful_save_when_persisted_then_success_notification() {
    let (mut board, _, mut notifications) = ready_board(two_todo_tickets(), false).await;

    let outcome = board
        .move_ticket("T2", "to_do", 1, Some("in_progress"), 0)
        .unwrap();
    outcome.persistence.unwrap().await.unwrap();

    let note = notifications.try_recv().unwrap();
    assert_that!(note.level, eq(NotificationLevel::Success));
    assert_that!(note.message, eq("Ticket \"Ticket T2\" moved to In Progress!"));
}

#[tokio::test]
async fn given_failing_backend_when_move_then_board_keeps_move_and_accepts_next() {
    // Given: saving T1 fails
    let gateway = two_todo_tickets();
    gateway.fail_status_for("T1");
    let (mut board, gateway, mut notifications) = ready_board(gateway, false).await;

    // When: T1 moves to_do[0] -> done[0]
    let first = board
        .move_ticket("T1", "to_do", 0, Some("done"), 0)
        .unwrap();
    let persisted = first.persistence.unwrap().await.unwrap();

    // Then: the optimistic state stays and an error is raised
    assert!(matches!(persisted, Persisted::Failed { .. }));
    assert_that!(ids(&board, TicketStatus::Done)[0], eq("T1"));
    let note = notifications.try_recv().unwrap();
    assert!(note.is_error());
    assert_that!(note.message, eq(STATUS_UPDATE_FAILED));

    // And: a following move of T2 goes through
    let second = board
        .move_ticket("T2", "to_do", 0, Some("in_progress"), 0)
        .unwrap();
    let persisted = second.persistence.unwrap().await.unwrap();
    assert_that!(persisted, eq(&Persisted::Saved));
    assert_that!(ids(&board, TicketStatus::InProgress)[0], eq("T2"));
    assert_that!(gateway.status_calls(), len(eq(2)));
}

#[tokio::test]
async fn given_rollback_enabled_when_save_fails_then_ticket_returns_to_source() {
    let gateway = two_todo_tickets();
    gateway.fail_status_for("T2");
    let (mut board, _, _) = ready_board(gateway, true).await;

    let outcome = board
        .move_ticket("T2", "to_do", 1, Some("done"), 0)
        .unwrap();
    let persisted = outcome.persistence.unwrap().await.unwrap();

    assert!(matches!(persisted, Persisted::RolledBack { .. }));
    assert_that!(
        ids(&board, TicketStatus::ToDo),
        eq(&vec!["T1".to_string(), "T2".to_string()])
    );
    let state = board.state();
    let restored = &state.snapshot().unwrap().column(TicketStatus::ToDo).tickets[1];
    assert_that!(restored.status, eq("to_do"));
}

#[tokio::test]
async fn given_rollback_enabled_when_ticket_moved_twice_and_both_saves_fail_then_back_at_first_origin() {
    let gateway = two_todo_tickets();
    gateway.fail_status_for("T1");
    let (mut board, _, _) = ready_board(gateway, true).await;

    // Given: T1 goes to done, then on to in_progress before the first save finishes
    let first = board
        .move_ticket("T1", "to_do", 0, Some("done"), 0)
        .unwrap();
    let second = board
        .move_ticket("T1", "done", 0, Some("in_progress"), 0)
        .unwrap();

    // When: both saves fail
    let first = first.persistence.unwrap().await.unwrap();
    let second = second.persistence.unwrap().await.unwrap();

    // Then: one rollback puts T1 where the server still has it
    let rolled_back = [&first, &second]
        .into_iter()
        .filter(|p| matches!(p, Persisted::RolledBack { .. }))
        .count();
    assert_that!(rolled_back, eq(1));
    assert_that!(
        ids(&board, TicketStatus::ToDo),
        eq(&vec!["T1".to_string(), "T2".to_string()])
    );
    assert_that!(ids(&board, TicketStatus::InProgress), is_empty());
    assert_that!(
        ids(&board, TicketStatus::Done),
        eq(&vec!["T3".to_string()])
    );
    let state = board.state();
    let restored = &state.snapshot().unwrap().column(TicketStatus::ToDo).tickets[0];
    assert_that!(restored.status, eq("to_do"));
}

#[tokio::test]
async fn given_rollback_enabled_when_unknown_status_ticket_fails_to_move_then_raw_status_restored() {
    // Given: "blocked" is bucketed into open
    let gateway = FakeGateway::with_loads([Load::Tickets(vec![
        ticket("A", "open"),
        ticket("B", "blocked"),
    ])]);
    gateway.fail_status_for("B");
    let (mut board, _, _) = ready_board(gateway, true).await;

    // When
    let outcome = board
        .move_ticket("B", "open", 1, Some("done"), 0)
        .unwrap();
    let persisted = outcome.persistence.unwrap().await.unwrap();

    // Then
    assert!(matches!(persisted, Persisted::RolledBack { .. }));
    let state = board.state();
    let open = &state.snapshot().unwrap().column(TicketStatus::Open).tickets;
    assert_that!(open.len(), eq(2));
    assert_that!(open[1].id, eq("B"));
    assert_that!(open[1].status, eq("blocked"));
}

#[tokio::test]
async fn given_unknown_status_ticket_when_reordered_within_column_then_takes_column_key() {
    let gateway = FakeGateway::with_loads([Load::Tickets(vec![
        ticket("A", "open"),
        ticket("B", "Blocked"),
    ])]);
    let (mut board, gateway, _) = ready_board(gateway, false).await;

    let outcome = board
        .move_ticket("B", "open", 1, Some("open"), 0)
        .unwrap();

    assert!(outcome.persistence.is_none());
    let moved = &outcome.snapshot.column(TicketStatus::Open).tickets[0];
    assert_that!(moved.id, eq("B"));
    assert_that!(moved.status, eq("open"));
    assert!(gateway.status_calls().is_empty());
}

#[tokio::test]
async fn given_same_column_reorder_when_move_then_not_persisted() {
    let (mut board, gateway, _) = ready_board(two_todo_tickets(), false).await;

    let outcome = board
        .move_ticket("T1", "to_do", 0, Some("to_do"), 1)
        .unwrap();

    assert!(outcome.persistence.is_none());
    assert_that!(
        ids(&board, TicketStatus::ToDo),
        eq(&vec!["T2".to_string(), "T1".to_string()])
    );
    tokio::task::yield_now().await;
    assert!(gateway.status_calls().is_empty());
}

#[tokio::test]
async fn given_dest_index_past_end_when_move_then_clamped_to_end() {
    let (mut board, _, _) = ready_board(two_todo_tickets(), false).await;

    board
        .move_ticket("T1", "TO_DO", 0, Some("Done"), 99)
        .unwrap();

    assert_that!(
        ids(&board, TicketStatus::Done),
        eq(&vec!["T3".to_string(), "T1".to_string()])
    );
}

#[tokio::test]
async fn given_subscriber_when_move_then_new_snapshot_published() {
    let (mut board, _, _) = ready_board(two_todo_tickets(), false).await;
    let mut rx = board.subscribe();

    board
        .move_ticket("T1", "to_do", 0, Some("open"), 0)
        .unwrap();

    assert!(rx.has_changed().unwrap());
    let state = rx.borrow_and_update().clone();
    assert_that!(
        state.snapshot().unwrap().column(TicketStatus::Open).tickets[0].id,
        eq("T1")
    );
}
