use noc_console::api::client::{decode_envelope, decode_strict, extract_detail};
use noc_console::api::{
    ApiClient, ApiError, CliApi, CliService, CustomerApi, CustomerService, OnuApi, OnuService, ServiceResponse,
    TicketApi, TicketService,
};
use noc_console::models::{
    CustomerRecord, OnuDetails, OnuTarget, PortTarget, PsbRecord, RunningTerminals, TicketCategory,
    TicketOperationResponse, TicketPriority, TicketRequest,
};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// Serve exactly one HTTP response and hand back the raw request text.
async fn serve_once(status_line: &'static str, body: &'static str) -> (String, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let base_url = format!("http://{}/api/v1", listener.local_addr().unwrap());

    let handle = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let request = read_request(&mut socket).await;
        let response = format!(
            "HTTP/1.1 {}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{}",
            status_line,
            body.len(),
            body
        );
        socket.write_all(response.as_bytes()).await.unwrap();
        socket.shutdown().await.unwrap();
        request
    });

    (base_url, handle)
}

async fn read_request(socket: &mut tokio::net::TcpStream) -> String {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 4096];
    loop {
        let n = socket.read(&mut chunk).await.unwrap();
        if n == 0 {
            break;
        }
        buf.extend_from_slice(&chunk[..n]);

        let text = String::from_utf8_lossy(&buf).to_string();
        if let Some(header_end) = text.find("\r\n\r\n") {
            let content_length = text[..header_end]
                .lines()
                .find_map(|line| {
                    let (name, value) = line.split_once(':')?;
                    name.eq_ignore_ascii_case("content-length")
                        .then(|| value.trim().parse::<usize>().ok())
                        .flatten()
                })
                .unwrap_or(0);
            if buf.len() >= header_end + 4 + content_length {
                return text;
            }
        }
    }
    String::from_utf8_lossy(&buf).to_string()
}

fn request_body(request: &str) -> serde_json::Value {
    let (_, body) = request.split_once("\r\n\r\n").unwrap();
    serde_json::from_str(body).unwrap()
}

#[test]
fn test_envelope_success_is_data() {
    let response: ServiceResponse<Vec<CustomerRecord>> =
        decode_envelope(200, r#"[{"id": 7, "name": "Alice", "user_pppoe": "alice1"}]"#).unwrap();
    let customers = response.data.unwrap();
    assert_eq!(customers[0].id, "7");
    assert_eq!(customers[0].display_line(), "Alice - alice1");
    assert!(response.error.is_none());
}

#[test]
fn test_envelope_detail_is_result_error() {
    let response: ServiceResponse<OnuDetails> = decode_envelope(404, r#"{"detail": "OLT 'X' not found"}"#).unwrap();
    assert_eq!(response.error.as_deref(), Some("OLT 'X' not found"));
    assert!(response.data.is_none());

    // Validation errors carry a structured detail
    let response: ServiceResponse<OnuDetails> =
        decode_envelope(422, r#"{"detail": [{"loc": ["body", "olt_name"], "msg": "field required"}]}"#).unwrap();
    assert!(response.error.unwrap().contains("field required"));
}

#[test]
fn test_envelope_null_success_is_empty() {
    let response: ServiceResponse<Vec<CustomerRecord>> = decode_envelope(200, "null").unwrap();
    assert!(response.data.is_none());
    assert!(response.error.is_none());

    let response: ServiceResponse<Vec<CustomerRecord>> = decode_envelope(200, " \n").unwrap();
    assert!(response.data.is_none());
}

#[test]
fn test_envelope_without_detail_is_thrown() {
    let err = decode_envelope::<OnuDetails>(500, "Internal Server Error").unwrap_err();
    assert_eq!(err.status(), Some(500));
    assert_eq!(err.message(), "HTTP 500 Internal Server Error");

    let err = decode_envelope::<OnuDetails>(200, "not json").unwrap_err();
    assert!(matches!(err, ApiError::Decode(_)));
    assert_eq!(err.status(), None);
}

#[test]
fn test_strict_decode_throws_on_error_status() {
    let terminals: RunningTerminals = decode_strict(200, r#"{"count": 1, "running_ports": [2301]}"#).unwrap();
    assert_eq!(terminals.running_ports, vec![2301]);

    let err = decode_strict::<RunningTerminals>(503, r#"{"detail": "Backend busy"}"#).unwrap_err();
    assert_eq!(
        err,
        ApiError::Status {
            status: 503,
            message: "Backend busy".to_string()
        }
    );
}

#[test]
fn test_extract_detail() {
    assert_eq!(extract_detail(r#"{"detail": "nope"}"#).as_deref(), Some("nope"));
    assert_eq!(extract_detail(r#"{"detail": null}"#), None);
    assert_eq!(extract_detail(r#"{"message": "nope"}"#), None);
    assert_eq!(extract_detail("<html></html>"), None);
}

#[test]
fn test_onu_details_wire_names() {
    let details: OnuDetails = serde_json::from_str(
        r#"{
            "type": "ZTE-F660",
            "phase_state": "working",
            "serial_number": "ZTEG12345678",
            "onu_distance": 1250,
            "online_duration": "3d 4h",
            "redaman": "-21.5",
            "ip_remote": "10.20.30.40",
            "eth_port": [{"interface": "eth_0/1", "is_unlocked": true}]
        }"#,
    )
    .unwrap();

    assert_eq!(details.onu_type.as_deref(), Some("ZTE-F660"));
    assert_eq!(details.onu_distance.as_deref(), Some("1250"));
    assert_eq!(details.attenuation.as_deref(), Some("-21.5"));
    assert_eq!(details.eth_port.len(), 1);
    assert!(details.modem_logs.is_none());

    let sparse: OnuDetails = serde_json::from_str(r#"{"onu_distance": "1.2km"}"#).unwrap();
    assert_eq!(sparse.onu_distance.as_deref(), Some("1.2km"));
    assert!(sparse.serial_number.is_none());
}

#[test]
fn test_customer_and_psb_decoding() {
    let customer: CustomerRecord = serde_json::from_str(
        r#"{"id": "c-1", "name": "Alice", "user_pppoe": "alice1",
            "invoices": [{"this_month": "PAID", "arrears_count": 2, "last_paid_month": "2024-05"}]}"#,
    )
    .unwrap();
    assert_eq!(customer.invoices().len(), 1);
    assert_eq!(customer.invoices()[0].arrears_count, 2);

    let psb: PsbRecord = serde_json::from_str(r#"{"name": "Bob", "paket": "20M"}"#).unwrap();
    assert_eq!(psb.package.as_deref(), Some("20M"));
}

#[test]
fn test_ticket_enums() {
    assert_eq!("high".parse::<TicketPriority>().unwrap(), TicketPriority::High);
    assert!("urgent".parse::<TicketPriority>().is_err());
    assert_eq!(TicketCategory::from("FREE".to_string()), TicketCategory::Free);
    assert_eq!(
        TicketCategory::from("BILLING".to_string()).to_string(),
        "BILLING"
    );
}

#[tokio::test]
async fn test_customer_search_request() {
    let (base_url, server) = serve_once("200 OK", r#"[{"id": 1, "name": "Alice", "user_pppoe": "alice1"}]"#).await;
    let service = CustomerService::new(ApiClient::new(&base_url).unwrap());

    let response = service.get_invoices("alice one").await.unwrap();

    assert_eq!(response.data.unwrap()[0].display_line(), "Alice - alice1");
    let request = server.await.unwrap();
    assert!(request.starts_with("GET /api/v1/customer/invoices?query=alice+one HTTP/1.1"));
}

#[tokio::test]
async fn test_bearer_token_is_sent() {
    let (base_url, server) = serve_once("200 OK", "[]").await;
    let service = CustomerService::new(ApiClient::new(&base_url).unwrap().with_token("s3cret"));

    service.get_psb().await.unwrap();

    let request = server.await.unwrap().to_ascii_lowercase();
    assert!(request.starts_with("get /api/v1/customer/psb"));
    assert!(request.contains("authorization: bearer s3cret"));
}

#[tokio::test]
async fn test_onu_detail_search_request() {
    let (base_url, server) = serve_once("404 Not Found", r#"{"detail": "OLT 'OLT-X' not found"}"#).await;
    let service = OnuService::new(ApiClient::new(&base_url).unwrap());

    let response = service
        .get_customer_details(&OnuTarget::new("OLT-X", "1/2/3:4"))
        .await
        .unwrap();

    assert_eq!(response.error.as_deref(), Some("OLT 'OLT-X' not found"));
    let request = server.await.unwrap();
    assert!(request.starts_with("POST /api/v1/onu/detail-search HTTP/1.1"));
    let body = request_body(&request);
    assert_eq!(body["olt_name"], "OLT-X");
    assert_eq!(body["interface"], "1/2/3:4");
}

#[tokio::test]
async fn test_ticket_create_only_request() {
    let (base_url, server) = serve_once(
        "200 OK",
        r#"{"success": true, "message": "Ticket created", "creation_result": "ok"}"#,
    )
    .await;
    let service = TicketService::new(ApiClient::new(&base_url).unwrap());
    let request = TicketRequest::new("alice1", "no signal").with_priority(TicketPriority::Medium);

    let response = service.create_only(&request).await.unwrap();

    assert_eq!(
        response.data,
        Some(TicketOperationResponse {
            success: true,
            message: "Ticket created".to_string(),
            creation_result: Some("ok".to_string()),
            ..Default::default()
        })
    );
    let raw = server.await.unwrap();
    assert!(raw.starts_with("POST /api/v1/ticket/ HTTP/1.1"));
    let body = request_body(&raw);
    assert_eq!(body["query"], "alice1");
    assert_eq!(body["priority"], "MEDIUM");
    assert_eq!(body["jenis"], "FREE");
    assert_eq!(body["process_immediately"], false);
}

#[tokio::test]
async fn test_running_terminals_error_is_thrown() {
    let (base_url, server) = serve_once("503 Service Unavailable", r#"{"detail": "Backend busy"}"#).await;
    let service = CliService::new(ApiClient::new(&base_url).unwrap());

    let err = service.list_running_terminals().await.unwrap_err();

    assert_eq!(err.status(), Some(503));
    assert_eq!(err.message(), "Backend busy");
    assert!(server.await.unwrap().starts_with("GET /api/v1/cli/running_terminals HTTP/1.1"));
}

#[tokio::test]
async fn test_unreachable_backend_is_transport_error() {
    // Bind then drop to get a port nobody listens on
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let service = CustomerService::new(ApiClient::new(&format!("http://{}/api/v1", addr)).unwrap());
    let err = service.get_invoices("alice").await.unwrap_err();

    assert!(matches!(err, ApiError::Transport(_)));
    assert_eq!(err.status(), None);
}

fn port_target() -> PortTarget {
    PortTarget {
        olt_name: "OLT-X".to_string(),
        olt_port: "1/2/3".to_string(),
    }
}

#[tokio::test]
async fn test_onu_state_request() {
    let (base_url, server) = serve_once("200 OK", r#"{"onu_state_data": "1/2/3:4 enable working"}"#).await;
    let service = OnuService::new(ApiClient::new(&base_url).unwrap());

    let response = service.get_onu_state(&port_target()).await.unwrap();

    assert_eq!(response.data.unwrap().onu_state_data, "1/2/3:4 enable working");
    let request = server.await.unwrap();
    assert!(request.starts_with("POST /api/v1/onu/onu-state HTTP/1.1"));
    let body = request_body(&request);
    assert_eq!(body["olt_name"], "OLT-X");
    assert_eq!(body["olt_port"], "1/2/3");
}

#[tokio::test]
async fn test_onu_rx_request() {
    let (base_url, server) = serve_once("200 OK", r#"{"onu_rx_data": "1/2/3:4 -21.500(dbm)"}"#).await;
    let service = OnuService::new(ApiClient::new(&base_url).unwrap());

    let response = service.get_onu_rx(&port_target()).await.unwrap();

    assert_eq!(response.data.unwrap().onu_rx_data, "1/2/3:4 -21.500(dbm)");
    let request = server.await.unwrap();
    assert!(request.starts_with("POST /api/v1/onu/onu-rx HTTP/1.1"));
    assert_eq!(request_body(&request)["olt_port"], "1/2/3");
}

#[tokio::test]
async fn test_ticket_search_request() {
    let (base_url, server) = serve_once("200 OK", r#"{"query": "alice1", "results": [{"no": "1"}]}"#).await;
    let service = TicketService::new(ApiClient::new(&base_url).unwrap());

    let response = service.search("alice1").await.unwrap();

    let found = response.data.unwrap();
    assert_eq!(found.query, "alice1");
    assert_eq!(found.results.len(), 1);
    assert_eq!(found.results[0]["no"], "1");
    assert!(server.await.unwrap().starts_with("GET /api/v1/ticket/search?query=alice1 HTTP/1.1"));
}

#[tokio::test]
async fn test_null_search_body_is_empty_list() {
    let (base_url, server) = serve_once("200 OK", "null").await;
    let service = CustomerService::new(ApiClient::new(&base_url).unwrap());

    let response = service.get_invoices("nobody").await.unwrap();

    assert!(response.data.is_none());
    assert!(response.error.is_none());
    server.await.unwrap();
}
