
use portfolio_client::entities::project::ProjectStatus;
use portfolio_client::errors::ApiError;
use portfolio_client::use_cases::dashboard::{Dashboard, DashboardTab, DeleteFlow, DeleteState};
use test_utils::{sample_project, MockProjectApi};

#[tokio::test]
async fn confirmed_delete_calls_the_api_once_and_signals_refetch() {
    let mut api = MockProjectApi::new();
    api.expect_delete_project()
        .withf(|id| id == "p1")
        .times(1)
        .returning(|_| Ok(()));

    let mut flow = DeleteFlow::new();
    flow.request("p1");
    assert_eq!(*flow.state(), DeleteState::Confirming("p1".to_string()));

    let refetch_due = flow.confirm(&api).await.unwrap();

    assert!(refetch_due);
    assert_eq!(*flow.state(), DeleteState::Idle);
}

#[tokio::test]
async fn cancel_makes_no_api_calls() {
    let mut api = MockProjectApi::new();
    api.expect_delete_project().times(0);

    let mut flow = DeleteFlow::new();
    flow.request("p1");
    flow.cancel();
    assert_eq!(*flow.state(), DeleteState::Idle);

    let refetch_due = flow.confirm(&api).await.unwrap();
    assert!(!refetch_due);
}

#[tokio::test]
async fn confirm_without_pending_request_is_a_noop() {
    let mut api = MockProjectApi::new();
    api.expect_delete_project().times(0);

    let mut flow = DeleteFlow::new();
    let refetch_due = flow.confirm(&api).await.unwrap();

    assert!(!refetch_due);
    assert_eq!(*flow.state(), DeleteState::Idle);
}

#[tokio::test]
async fn failed_delete_resets_the_flow_and_reports_the_server_message() {
    let mut api = MockProjectApi::new();
    api.expect_delete_project().times(1).returning(|_| {
        Err(ApiError::Api {
            status: 500,
            message: "Project is referenced elsewhere".to_string(),
        })
    });

    let mut flow = DeleteFlow::new();
    flow.request("p1");
    let err = flow.confirm(&api).await.unwrap_err();

    assert_eq!(
        err.display_message("Failed to delete project"),
        "Project is referenced elsewhere"
    );
    assert_eq!(*flow.state(), DeleteState::Idle);
}

#[tokio::test]
async fn failed_delete_without_server_message_uses_the_fallback() {
    let mut api = MockProjectApi::new();
    api.expect_delete_project()
        .times(1)
        .returning(|_| Err(ApiError::Request("connection refused".to_string())));

    let mut flow = DeleteFlow::new();
    flow.request("p1");
    let err = flow.confirm(&api).await.unwrap_err();

    assert_eq!(
        err.display_message("Failed to delete project"),
        "Failed to delete project"
    );
}

#[test]
fn request_replaces_the_pending_confirmation() {
    let mut flow = DeleteFlow::new();
    flow.request("p1");
    flow.request("p2");

    assert_eq!(*flow.state(), DeleteState::Confirming("p2".to_string()));
}

#[test]
fn dashboard_edit_opens_the_editor_with_a_target() {
    let mut dashboard = Dashboard::new();
    assert_eq!(dashboard.tab(), DashboardTab::Projects);

    let project = sample_project("p1", false, ProjectStatus::Ongoing);
    dashboard.edit(project.clone());

    assert_eq!(dashboard.tab(), DashboardTab::Editor);
    assert_eq!(dashboard.editing(), Some(&project));
}

#[test]
fn dashboard_open_editor_starts_blank() {
    let mut dashboard = Dashboard::new();
    dashboard.edit(sample_project("p1", false, ProjectStatus::Ongoing));

    dashboard.open_editor();

    assert_eq!(dashboard.tab(), DashboardTab::Editor);
    assert_eq!(dashboard.editing(), None);
}

#[test]
fn dashboard_close_editor_returns_to_the_list() {
    let mut dashboard = Dashboard::new();
    dashboard.edit(sample_project("p1", false, ProjectStatus::Ongoing));

    dashboard.close_editor();

    assert_eq!(dashboard.tab(), DashboardTab::Projects);
    assert_eq!(dashboard.editing(), None);
}
