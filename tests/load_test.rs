//! Load testing for the site server.

use std::time::{Duration, Instant};

use uno_site::config::SiteConfig;
use uno_site::routing::SiteRouter;

mod common;

#[tokio::test]
async fn test_load_performance() {
    let site = common::spawn_site(SiteConfig::default()).await;

    let concurrency = 20; // Reduced for consistency in debug mode
    let requests_per_task = 25;
    let total_requests = concurrency * requests_per_task;
    let paths = SiteRouter::default().paths();

    let client = reqwest::Client::new();
    let start = Instant::now();

    let mut tasks = Vec::new();
    for worker in 0..concurrency {
        let client = client.clone();
        let urls: Vec<String> = paths.iter().map(|p| site.url(p)).collect();
        tasks.push(tokio::spawn(async move {
            let mut latencies = Vec::new();
            for i in 0..requests_per_task {
                let url = &urls[(worker + i) % urls.len()];
                let req_start = Instant::now();
                if let Ok(res) = client.get(url).send().await {
                    if res.status().is_success() && res.bytes().await.is_ok() {
                        latencies.push(req_start.elapsed());
                    }
                }
            }
            latencies
        }));
    }

    let mut all_latencies: Vec<Duration> = Vec::new();
    for task in tasks {
        all_latencies.extend(task.await.unwrap());
    }

    let duration = start.elapsed();
    let rps = total_requests as f64 / duration.as_secs_f64();

    assert_eq!(all_latencies.len(), total_requests, "some page requests failed");

    all_latencies.sort();
    let p50 = all_latencies[all_latencies.len() / 2];
    let p95 = all_latencies[(all_latencies.len() as f64 * 0.95) as usize];
    let p99 = all_latencies[(all_latencies.len() as f64 * 0.99) as usize];

    println!("\n--- Load Test Results ---");
    println!("Total Requests: {}", total_requests);
    println!("Concurrency:    {}", concurrency);
    println!("Total Duration: {:?}", duration);
    println!("Requests/sec:   {:.2}", rps);
    println!("P50 Latency:    {:?}", p50);
    println!("P95 Latency:    {:?}", p95);
    println!("P99 Latency:    {:?}", p99);
    println!("-------------------------\n");

    site.shutdown.trigger();
}
