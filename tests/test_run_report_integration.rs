//! End-to-end tests for `run_report`.
//!
//! Each test lays out a day of logs in a scratch directory, points the
//! lookup client at a mock server and checks the CSV and PNG written.

use std::fs;
use std::path::Path;

use chrono::NaiveDate;
use logmap::{run_report, Config, LogFormat, LogLevel};
use tempfile::TempDir;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const DAY: &str = "2021_10_31";

fn access_line(ip: &str) -> String {
    format!(
        r#"{} - - [31/Oct/2021:00:54:46 -0400] "GET / HTTP/1.1" 200 284 "-" "Mozilla/5.0 (X11; Linux x86_64)""#,
        ip
    )
}

fn write_log(dir: &Path, name: &str, lines: &[String]) {
    let mut body = lines.join("\n");
    body.push('\n');
    fs::write(dir.join(name), body).expect("Failed to write log");
}

fn test_config(dir: &TempDir, lookup_url: Option<String>) -> Config {
    Config {
        date: NaiveDate::from_ymd_opt(2021, 10, 31),
        apache_dir: dir.path().to_path_buf(),
        sshd_dir: dir.path().to_path_buf(),
        csv_dir: dir.path().to_path_buf(),
        map_dir: dir.path().to_path_buf(),
        api_key: lookup_url.as_ref().map(|_| "test-key".to_string()),
        lookup_url: lookup_url.unwrap_or_else(|| "http://127.0.0.1:9".to_string()),
        lookup_delay_ms: 0,
        timeout_seconds: 5,
        dpi: 100,
        log_level: LogLevel::Error,
        log_format: LogFormat::Plain,
        ..Default::default()
    }
}

async fn mount_location(server: &MockServer, ip: &str, body: &str) {
    Mock::given(method("GET"))
        .and(path(format!("/shodan/host/{}", ip)))
        .and(query_param("key", "test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_string(body.to_string()))
        .expect(1)
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_report_for_apache_only_day() {
    let dir = TempDir::new().unwrap();
    write_log(
        dir.path(),
        &format!("apache_{}.log", DAY),
        &[
            access_line("1.2.3.4"),
            access_line("5.6.7.8"),
            access_line("1.2.3.4"),
            access_line("1.2.3.4"),
        ],
    );

    let server = MockServer::start().await;
    mount_location(
        &server,
        "1.2.3.4",
        r#"{"country_name":"US","city":"Ashburn","longitude":-77.4,"latitude":39.0,"isp":"ExampleNet"}"#,
    )
    .await;
    Mock::given(method("GET"))
        .and(path("/shodan/host/5.6.7.8"))
        .respond_with(ResponseTemplate::new(404))
        .expect(1)
        .mount(&server)
        .await;

    let report = run_report(test_config(&dir, Some(server.uri()))).await.unwrap();

    assert_eq!(report.unique_ips, 2);
    assert_eq!(report.total_hits, 4);
    assert_eq!(report.known, 1);
    assert_eq!(report.unknown, 1);
    assert_eq!(report.csv_path, dir.path().join("ipList_2021_10_31.csv"));

    let csv = fs::read_to_string(&report.csv_path).unwrap();
    assert_eq!(
        csv,
        "Ip Log,2021_10_31,Unique IPs:,2,Total Hits:,4\n\
         IP,Hits,Service,Country,City,Longitude,Latitude,Isp\n\
         1.2.3.4,3,apache,US,Ashburn,-77.4,39.0,ExampleNet\n\
         5.6.7.8,1,apache,-,-,0,0,-\n"
    );

    let map_path = report.map_path.expect("map rendered");
    assert_eq!(map_path, dir.path().join("map_2021_10_31.png"));
    let decoder = png::Decoder::new(fs::File::open(&map_path).unwrap());
    let reader = decoder.read_info().unwrap();
    let info = reader.info();
    assert_eq!(info.width, 640);
    let dims = info.pixel_dims.expect("DPI recorded");
    assert_eq!(dims.xppu, 3937);
}

#[tokio::test]
async fn test_sshd_entries_follow_apache_on_ties() {
    let dir = TempDir::new().unwrap();
    write_log(
        dir.path(),
        &format!("apache_{}.log", DAY),
        &[access_line("10.0.0.1"), access_line("10.0.0.1")],
    );
    write_log(
        dir.path(),
        &format!("auth_{}.log", DAY),
        &[
            "Oct 31 00:02:11 host sshd[1234]: Failed password for root from 45.135.232.20 port 51234 ssh2".to_string(),
            "Oct 31 00:02:13 host sshd[1234]: Failed password for root from 45.135.232.20 port 51240 ssh2".to_string(),
            "Oct 31 00:03:00 host CRON[99]: session opened for 10.9.9.9".to_string(),
            "Oct 31 00:04:00 host sshd[1240]: Invalid user admin from 203.0.113.9 port 4000".to_string(),
            "Oct 31 00:04:05 host sshd[1240]: Invalid user admin from 203.0.113.9 port 4001".to_string(),
            "Oct 31 00:04:09 host sshd[1240]: Invalid user admin from 203.0.113.9 port 4002".to_string(),
        ],
    );

    let mut config = test_config(&dir, None);
    config.api_key = None;
    config.no_map = true;
    let report = run_report(config).await.unwrap();

    assert_eq!(report.total_hits, 7);
    assert_eq!(report.unique_ips, 3);
    assert_eq!(report.known, 0);
    assert_eq!(report.unknown, 3);
    assert_eq!(report.map_path, None);
    assert!(!dir.path().join("map_2021_10_31.png").exists());

    let csv = fs::read_to_string(&report.csv_path).unwrap();
    let rows: Vec<&str> = csv.lines().skip(2).collect();
    assert_eq!(
        rows,
        vec![
            "203.0.113.9,3,sshd,-,-,0,0,-",
            "10.0.0.1,2,apache,-,-,0,0,-",
            "45.135.232.20,2,sshd,-,-,0,0,-",
        ]
    );
}

#[tokio::test]
async fn test_commas_in_location_are_stripped() {
    let dir = TempDir::new().unwrap();
    write_log(
        dir.path(),
        &format!("apache_{}.log", DAY),
        &[access_line("9.9.9.9")],
    );

    let server = MockServer::start().await;
    mount_location(
        &server,
        "9.9.9.9",
        r#"{"country_name":"Korea, Republic of","city":null,"longitude":null,"latitude":null,"isp":"Telecom, Inc."}"#,
    )
    .await;

    let mut config = test_config(&dir, Some(server.uri()));
    config.no_map = true;
    let report = run_report(config).await.unwrap();

    assert_eq!(report.known, 1);
    let csv = fs::read_to_string(&report.csv_path).unwrap();
    assert_eq!(
        csv.lines().nth(2),
        Some("9.9.9.9,1,apache,Korea Republic of,-,0,0,Telecom Inc.")
    );
}

#[tokio::test]
async fn test_missing_apache_log_is_fatal() {
    let dir = TempDir::new().unwrap();
    write_log(
        dir.path(),
        &format!("auth_{}.log", DAY),
        &["Oct 31 00:02:11 host sshd[1]: Failed password from 1.1.1.1 port 2".to_string()],
    );

    let err = run_report(test_config(&dir, None)).await.unwrap_err();
    assert!(format!("{:#}", err).contains("apache_2021_10_31.log"));
    assert!(!dir.path().join("ipList_2021_10_31.csv").exists());
    assert!(!dir.path().join("map_2021_10_31.png").exists());
}

#[tokio::test]
async fn test_unreadable_sshd_log_is_skipped() {
    let dir = TempDir::new().unwrap();
    write_log(
        dir.path(),
        &format!("apache_{}.log", DAY),
        &[access_line("1.2.3.4"), access_line("1.2.3.4")],
    );
    // Opens on Linux but fails on read
    fs::create_dir(dir.path().join(format!("auth_{}.log", DAY))).unwrap();

    let mut config = test_config(&dir, None);
    config.no_map = true;
    let report = run_report(config).await.unwrap();

    assert_eq!(report.unique_ips, 1);
    assert_eq!(report.total_hits, 2);
    let csv = fs::read_to_string(&report.csv_path).unwrap();
    assert!(csv.starts_with("Ip Log,2021_10_31,Unique IPs:,1,Total Hits:,2\n"));
    assert!(!csv.contains(",sshd,"));
}

#[tokio::test]
async fn test_invalid_config_is_rejected_before_reading() {
    let dir = TempDir::new().unwrap();
    let mut config = test_config(&dir, None);
    config.dpi = 0;

    let err = run_report(config).await.unwrap_err();
    assert!(err.to_string().contains("--dpi"));
}

#[tokio::test]
async fn test_server_errors_do_not_abort_the_run() {
    let dir = TempDir::new().unwrap();
    write_log(
        dir.path(),
        &format!("apache_{}.log", DAY),
        &[access_line("1.1.1.1"), access_line("2.2.2.2")],
    );

    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503))
        .expect(2)
        .mount(&server)
        .await;

    let mut config = test_config(&dir, Some(server.uri()));
    config.no_map = true;
    let report = run_report(config).await.unwrap();
    assert_eq!(report.unknown, 2);
    assert_eq!(report.known, 0);
}
