use planner::{HttpPlanService, PlanService, RefineRequest, ServiceError};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::sync::oneshot;

fn header_end(buf: &[u8]) -> Option<usize> {
    buf.windows(4).position(|w| w == b"\r\n\r\n").map(|i| i + 4)
}

fn content_length(head: &str) -> usize {
    head.lines()
        .filter_map(|line| line.split_once(':'))
        .find(|(name, _)| name.trim().eq_ignore_ascii_case("content-length"))
        .and_then(|(_, value)| value.trim().parse().ok())
        .unwrap_or(0)
}

/// Accept one connection, read the whole request and answer with `status` and
/// `body`. Returns the base URL and a receiver for the raw request text.
async fn serve_once(
    status: &'static str,
    body: &'static str,
) -> (String, oneshot::Receiver<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let url = format!("http://{}", listener.local_addr().unwrap());
    let (tx, rx) = oneshot::channel();

    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut request = Vec::new();
        let mut chunk = [0u8; 4096];
        loop {
            let n = socket.read(&mut chunk).await.unwrap();
            if n == 0 {
                break;
            }
            request.extend_from_slice(&chunk[..n]);
            if let Some(end) = header_end(&request) {
                let head = String::from_utf8_lossy(&request[..end]).into_owned();
                if request.len() >= end + content_length(&head) {
                    break;
                }
            }
        }

        let response = format!(
            "HTTP/1.1 {}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{}",
            status,
            body.len(),
            body
        );
        socket.write_all(response.as_bytes()).await.unwrap();
        socket.shutdown().await.ok();
        let _ = tx.send(String::from_utf8_lossy(&request).into_owned());
    });

    (url, rx)
}

fn refine_request() -> RefineRequest {
    RefineRequest {
        original_plan: "# Plan".to_string(),
        user_feedback: "add risks".to_string(),
    }
}

#[tokio::test]
async fn refined_plan_is_returned() {
    let (url, request) = serve_once("200 OK", r#"{"refined_plan":"X"}"#).await;
    let service = HttpPlanService::new(url);

    let plan = service.refine_plan(&refine_request()).await.unwrap();
    assert_eq!(plan, "X");

    let request = request.await.unwrap();
    assert!(request.starts_with("POST /api/refine-project-plan "), "{}", request);
    assert!(request.contains(r##""original_plan":"# Plan""##), "{}", request);
    assert!(request.contains(r#""user_feedback":"add risks""#), "{}", request);
}

#[tokio::test]
async fn error_status_wins_over_a_valid_body() {
    let (url, _request) = serve_once("500 Internal Server Error", r#"{"refined_plan":"X"}"#).await;
    let service = HttpPlanService::new(url);

    let err = service.refine_plan(&refine_request()).await.unwrap_err();
    assert_eq!(
        err,
        ServiceError::Status {
            endpoint: "/api/refine-project-plan",
            status: 500,
            body: r#"{"refined_plan":"X"}"#.to_string(),
        }
    );
}

#[tokio::test]
async fn success_without_the_field_is_malformed() {
    let (url, _request) = serve_once("200 OK", r#"{"plan":"X"}"#).await;
    let service = HttpPlanService::new(url);

    let err = service.refine_plan(&refine_request()).await.unwrap_err();
    assert!(matches!(err, ServiceError::MalformedResponse { .. }), "{:?}", err);
}

#[tokio::test]
async fn closed_port_is_a_transport_error() {
    let service = HttpPlanService::new("http://127.0.0.1:1");

    let err = service.refine_plan(&refine_request()).await.unwrap_err();
    assert!(
        matches!(
            err,
            ServiceError::Transport {
                endpoint: "/api/refine-project-plan",
                ..
            }
        ),
        "{:?}",
        err
    );
}

#[tokio::test]
async fn pushed_tickets_accept_the_created_field() {
    let (url, request) = serve_once(
        "200 OK",
        r#"{"created":[{"summary":"Set up CI","key":"PLAN-7","url":"https://jira/PLAN-7"}]}"#,
    )
    .await;
    let service = HttpPlanService::new(url);
    let tickets = vec![planner::Ticket {
        summary: "Set up CI".to_string(),
        description: String::new(),
    }];

    let created = service.push_tickets(&tickets).await.unwrap();
    assert_eq!(created[0].key.as_deref(), Some("PLAN-7"));
    let request = request.await.unwrap();
    assert!(request.starts_with("POST /api/push-finalized-tickets "), "{}", request);
    assert!(request.contains(r#"[{"summary":"Set up CI","description":""}]"#));
}
