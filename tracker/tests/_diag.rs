use longshot_types::SlideId;
use longshot_tracker::{Tracker, TrackerConfig};
use wiremock::{MockServer};

#[tokio::test]
async fn diag() {
    let server = MockServer::start().await;
    let tracker = Tracker::new(Some(TrackerConfig {
        url: server.uri(),
        key: "test-anon-key".to_string(),
    }));
    let _ = tracker
        .sender()
        .unwrap()
        .send_slide_view(SlideId::Ticket, 42)
        .await;
    for req in server.received_requests().await.unwrap() {
        if req.method.as_str() != "POST" { continue; }
        let expected = "resolution=merge-duplicates,return=minimal";
        for (name, val) in req.headers.iter() {
            if name.as_str().eq_ignore_ascii_case("prefer") {
                let got = val.to_str().unwrap_or("<bin>");
                println!("PREFER got  = {:?} (len {})", got, got.len());
                println!("PREFER want = {:?} (len {})", expected, expected.len());
                println!("EQUAL = {}", got == expected);
            }
        }
        // count how many prefer headers
        let n = req.headers.get_all("prefer").iter().count();
        println!("prefer header count = {n}");
    }
}
