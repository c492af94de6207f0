//! Performance benchmarks for the Pay-Cycle Engine.
//!
//! Targets:
//! - Single schedule (3 periods): < 50μs mean
//! - Long schedule (120 monthly periods): < 1ms mean
//! - Preview request through the router: < 200μs mean
//! - Assignment of 1000 activities: < 50ms mean
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use chrono::{NaiveDate, NaiveDateTime};
use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use pay_cycle_engine::api::{AppState, create_router};
use pay_cycle_engine::calendar::{MAX_PERIOD_COUNT, assign_activities, build_pay_schedule};
use pay_cycle_engine::config::ConfigLoader;
use pay_cycle_engine::models::{
    DayOfWeek, PayFrequency, PayPlan, PayableActivity, PayableTrigger,
};

use axum::{body::Body, http::Request};
use tower::ServiceExt;

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 1, 14).unwrap()
}

fn plans() -> Vec<PayPlan> {
    vec![
        PayPlan::new(PayFrequency::Weekly).with_start_day_of_week(DayOfWeek::Monday),
        PayPlan::new(PayFrequency::Biweekly).with_start_day_of_week(DayOfWeek::Friday),
        PayPlan::new(PayFrequency::Semimonthly),
        PayPlan::new(PayFrequency::Monthly).with_start_day_of_month(31),
    ]
}

/// Benchmark: default-length schedule per frequency.
fn bench_schedule_by_frequency(c: &mut Criterion) {
    let mut group = c.benchmark_group("schedule_by_frequency");

    for plan in plans() {
        group.bench_with_input(
            BenchmarkId::from_parameter(plan.frequency),
            &plan,
            |b, plan| b.iter(|| black_box(build_pay_schedule(plan, today(), 3).unwrap())),
        );
    }

    group.finish();
}

/// Benchmark: the longest schedule a request may ask for.
fn bench_long_schedule(c: &mut Criterion) {
    let plan = PayPlan::new(PayFrequency::Monthly).with_start_day_of_month(31);

    c.bench_function("monthly_max_periods", |b| {
        b.iter(|| black_box(build_pay_schedule(&plan, today(), MAX_PERIOD_COUNT).unwrap()))
    });
}

/// Benchmark: preview request through the HTTP router.
fn bench_preview_request(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let config = ConfigLoader::load("./config/default").expect("Failed to load config");
    let router = create_router(AppState::new(config));
    let body = serde_json::json!({
        "plan": {
            "frequency": "BIWEEKLY",
            "period_start_day_of_week": "FRIDAY",
            "payment_lag_days": 7
        },
        "today": "2026-01-14"
    })
    .to_string();

    c.bench_function("preview_request", |b| {
        b.to_async(&rt).iter(|| async {
            let router = router.clone();
            let response = router
                .oneshot(
                    Request::builder()
                        .method("POST")
                        .uri("/pay-periods/preview")
                        .header("Content-Type", "application/json")
                        .body(Body::from(body.clone()))
                        .unwrap(),
                )
                .await
                .unwrap();
            black_box(response)
        })
    });
}

/// Benchmark: assigning a batch of deliveries.
fn bench_assignment_batch(c: &mut Criterion) {
    let plan = PayPlan::new(PayFrequency::Weekly)
        .with_start_day_of_week(DayOfWeek::Monday)
        .with_cutoff_time("17:00")
        .with_payable_trigger(PayableTrigger::DeliveryDate);
    let base: NaiveDateTime = today().and_hms_opt(6, 0, 0).unwrap();

    let activities: Vec<PayableActivity> = (0..1000)
        .map(|i| PayableActivity {
            id: format!("load_{:04}", i),
            delivered_at: Some(base + chrono::Duration::minutes(i * 97)),
            completed_at: None,
            approved_at: None,
        })
        .collect();

    let mut group = c.benchmark_group("assignment");
    group.throughput(Throughput::Elements(activities.len() as u64));
    group.bench_function("batch_1000", |b| {
        b.iter(|| black_box(assign_activities(&plan, &activities).unwrap()))
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_schedule_by_frequency,
    bench_long_schedule,
    bench_preview_request,
    bench_assignment_batch,
);
criterion_main!(benches);
