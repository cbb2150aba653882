use std::sync::Arc;

use chrono::NaiveDate;

use glass_request::desk::RequestDesk;
use glass_request::models::{ExistingRequestRecord, FormDraft, RequestError, RequestSession};
use glass_request::sheet::MockSheet;

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn draft(code: &str, date: NaiveDate) -> FormDraft {
    let mut draft = FormDraft::new(date);
    draft.customer_name = "ACME Facades".to_string();
    draft.project_code = code.to_string();
    draft.project_name = "Marina Tower".to_string();
    draft.project_sqm = 2500.0;
    draft.cutting_list_received = "Yes".to_string();
    draft.glass_description = "8mm Tinted".to_string();
    draft.height_mm = 1500.0;
    draft.width_mm = 1200.0;
    draft.quantity = 10;
    draft.wastage_percent = 3.0;
    draft.remarks = "north elevation".to_string();
    draft
}

fn history() -> Vec<ExistingRequestRecord> {
    vec![
        ExistingRequestRecord::new("21", Some(ymd(2024, 3, 1)), "032401-1"),
        ExistingRequestRecord::new("34", Some(ymd(2024, 3, 4)), "032402-2"),
        ExistingRequestRecord::new("34", Some(ymd(2024, 3, 2)), "032402-1"),
    ]
}

#[tokio::test]
async fn test_submit_appends_and_resets() {
    let sheet = Arc::new(MockSheet::with_records("sheet", history()));
    let desk = RequestDesk::from_sheet(sheet.clone());
    let mut session = RequestSession::new(draft("34", ymd(2024, 3, 5)));

    let record = desk.submit(&mut session).await.unwrap();
    assert_eq!(record.request_number, "032402-3");
    assert_eq!(record.sqm, 18.0);
    assert_eq!(record.date, "2024-03-05");

    assert_eq!(session.added_requests, vec![record.clone()]);
    assert_eq!(sheet.saved(), vec![record]);

    assert_eq!(session.draft.project_code, "");
    assert_eq!(session.draft.remarks, "");
    assert_eq!(session.draft.glass_description, "8mm Tinted");
    assert_eq!(session.draft.request_date, ymd(2024, 3, 5));
}

#[tokio::test]
async fn test_failed_save_keeps_session() {
    let sheet = Arc::new(MockSheet::with_records("sheet", history()));
    sheet.fail_sink(RequestError::SinkUnavailable("connection reset".to_string()));
    let desk = RequestDesk::from_sheet(sheet.clone());
    let original = draft("21", ymd(2024, 3, 5));
    let mut session = RequestSession::new(original.clone());

    let err = desk.submit(&mut session).await.unwrap_err();
    assert_eq!(err.error_code(), "SINK_UNAVAILABLE");
    assert!(session.added_requests.is_empty());
    assert_eq!(session.draft, original);
    assert!(sheet.saved().is_empty());

    // resubmitting after the sheet recovers numbers the same request
    sheet.clear_failures();
    let record = desk.submit(&mut session).await.unwrap();
    assert_eq!(record.request_number, "032401-2");
}

#[tokio::test]
async fn test_unreachable_source_still_numbers() {
    let sheet = Arc::new(MockSheet::with_records("sheet", history()));
    sheet.fail_source(RequestError::SourceUnavailable("HTTP 503".to_string()));
    let desk = RequestDesk::from_sheet(sheet.clone());
    let mut session = RequestSession::new(draft("34", ymd(2024, 3, 5)));

    let preview = desk.preview_number(&session.draft).await;
    assert_eq!(preview.to_string(), "032401-1");

    let record = desk.submit(&mut session).await.unwrap();
    assert_eq!(record.request_number, "032401-1");
}

#[tokio::test]
async fn test_preview_does_not_reserve() {
    let sheet = Arc::new(MockSheet::with_records("sheet", history()));
    let desk = RequestDesk::from_sheet(sheet.clone());
    let pending = draft("55", ymd(2024, 3, 5));

    let first = desk.preview_number(&pending).await;
    let second = desk.preview_number(&pending).await;
    assert_eq!(first, second);
    assert_eq!(first.to_string(), "032403-1");
    assert!(sheet.saved().is_empty());
}

#[tokio::test]
async fn test_new_project_joins_registry_after_save() {
    let sheet = Arc::new(MockSheet::with_records("sheet", history()));
    let desk = RequestDesk::from_sheet(sheet.clone());

    let mut session = RequestSession::new(draft("55", ymd(2024, 3, 5)));
    let first = desk.submit(&mut session).await.unwrap();
    assert_eq!(first.request_number, "032403-1");

    // next day, same project: counter continues from the saved row
    session.draft = draft("55", ymd(2024, 3, 6));
    let second = desk.submit(&mut session).await.unwrap();
    assert_eq!(second.request_number, "032403-2");

    session.draft = draft("60", ymd(2024, 3, 6));
    let third = desk.submit(&mut session).await.unwrap();
    assert_eq!(third.request_number, "032404-1");
    assert_eq!(session.added_requests.len(), 3);
}

#[tokio::test]
async fn test_catalog_failure_yields_empty_list() {
    let sheet = Arc::new(MockSheet::new("sheet"));
    sheet.set_descriptions(vec!["6mm Clear".to_string(), "8mm Tinted".to_string()]);
    let desk = RequestDesk::from_sheet(sheet.clone());
    assert_eq!(desk.glass_descriptions().await, vec!["6mm Clear", "8mm Tinted"]);

    sheet.fail_catalog(RequestError::CatalogUnavailable("HTTP 404".to_string()));
    assert!(desk.glass_descriptions().await.is_empty());
}
