use criterion::{criterion_group, criterion_main, Criterion};
use std::sync::Arc;

use service::auth::domain::{LoginRequest, RegistrationRequest};
use service::auth::password::Argon2Hasher;
use service::auth::{AuthService, MemoryCredentialStore};

fn bench_login(c: &mut Criterion) {
    let store = Arc::new(MemoryCredentialStore::new());
    let svc = AuthService::new(store, Argon2Hasher::default());

    // pre-create user outside of the benchmark using a tokio runtime
    let rt = tokio::runtime::Runtime::new().unwrap();
    rt.block_on(svc.register(RegistrationRequest::new("bench", "Benchmark1"))).unwrap();

    c.bench_function("auth_login_verify", |b| {
        b.iter(|| {
            rt.block_on(svc.login(LoginRequest::new("bench", "Benchmark1"))).unwrap();
        });
    });

    c.bench_function("auth_login_unknown_user", |b| {
        b.iter(|| {
            let _ = rt.block_on(svc.login(LoginRequest::new("nobody", "Benchmark1")));
        });
    });
}

criterion_group!(benches, bench_login);
criterion_main!(benches);
