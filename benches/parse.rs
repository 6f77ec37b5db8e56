//! Performance benchmarks for cronfile
//!
//! Run with: cargo bench

use criterion::{criterion_group, criterion_main, Criterion};
use cronfile::CrontabConfig;

const SAMPLE: &str = "\
PATH=/usr/local/sbin:/usr/local/bin:/sbin:/bin:/usr/sbin:/usr/bin
SHELL=/bin/sh
MAILTO=root

#m\th\tdom\tmon\tdow\tuser\tcommand
17\t*\t*\t*\t*\troot\tcd / && run-parts --report /etc/cron.hourly
25\t6\t*\t*\t*\troot\ttest -x /usr/sbin/anacron || ( cd / && run-parts --report /etc/cron.daily )
47\t6\t*\t*\t7\troot\ttest -x /usr/sbin/anacron || ( cd / && run-parts --report /etc/cron.weekly )
52\t6\t1\t*\t*\troot\ttest -x /usr/sbin/anacron || ( cd / && run-parts --report /etc/cron.monthly )
10\t17\t*\t*\t*\tprivacyidea\t/usr/bin/privacyidea-backup
1\t10\t1\t*\t*\tprivacyidea\t/usr/bin/privacyidea-backup
";

fn bench_parse(c: &mut Criterion) {
    c.bench_function("CrontabConfig::parse", |b| {
        b.iter(|| CrontabConfig::parse(SAMPLE).unwrap());
    });

    // A larger file: the same job block repeated.
    let large: String = SAMPLE.repeat(100);
    c.bench_function("CrontabConfig::parse large", |b| {
        b.iter(|| CrontabConfig::parse(&large).unwrap());
    });
}

fn bench_format(c: &mut Criterion) {
    let config = CrontabConfig::parse(SAMPLE).unwrap();
    c.bench_function("CrontabConfig::format", |b| {
        b.iter(|| config.format());
    });
}

criterion_group!(benches, bench_parse, bench_format);
criterion_main!(benches);
