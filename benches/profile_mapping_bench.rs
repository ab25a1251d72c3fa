// ABOUTME: Criterion benchmarks for Yahoo profile mapping and OAuth request signing
// ABOUTME: Measures JSON-to-profile conversion and HMAC-SHA1 authorization header cost
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Criterion benchmarks for the per-login hot paths.
//!
//! Mapping runs once per login on a few kilobytes of JSON; signing runs on
//! every provider call.

#![allow(
    clippy::missing_docs_in_private_items,
    clippy::unwrap_used,
    missing_docs
)]

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use oauth_profiles::models::UserProfile;
use oauth_profiles::oauth1::Signer;
use oauth_profiles::yahoo::map_profile;
use url::Url;

const PROFILE: &str = include_str!("../tests/fixtures/yahoo_profile.json");

fn bench_profile_mapping(c: &mut Criterion) {
    let mut group = c.benchmark_group("yahoo_profile_mapping");

    group.throughput(Throughput::Bytes(PROFILE.len() as u64));
    group.bench_function("recorded_profile", |b| {
        b.iter(|| map_profile(black_box(PROFILE)).unwrap());
    });

    group.bench_function("recorded_profile_to_json", |b| {
        let profile: UserProfile = map_profile(PROFILE).unwrap().into();
        b.iter(|| serde_json::to_string(black_box(&profile)).unwrap());
    });

    group.finish();
}

fn bench_request_signing(c: &mut Criterion) {
    let mut group = c.benchmark_group("oauth1_signing");
    let url = Url::parse("http://social.yahooapis.com/v1/user/PCSXZCYSWC6XUJNMZKRGWVPHNU/profile?format=json")
        .unwrap();

    group.bench_function("authorization_header", |b| {
        let signer = Signer::new("consumer-key", "consumer-secret")
            .with_token("access-token", "access-secret");
        b.iter(|| {
            signer.authorization_header_with(
                black_box("GET"),
                black_box(&url),
                &[],
                &[],
                "kllo9940pd9333jh",
                1_191_242_096,
            )
        });
    });

    group.finish();
}

criterion_group!(benches, bench_profile_mapping, bench_request_signing);
criterion_main!(benches);
