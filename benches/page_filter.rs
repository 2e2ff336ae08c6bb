//! Benchmarks for the free-text page filter.
//!
//! These benchmarks measure the case-insensitive matching that runs on every
//! keystroke while the search box is active.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

struct Page {
    title: &'static str,
    subtitle: &'static str,
    search_terms: &'static [&'static str],
    sections: &'static [(&'static str, &'static str)],
}

const PAGES: &[Page] = &[
    Page {
        title: "Overview",
        subtitle: "What this process does and why",
        search_terms: &["overview", "introduction", "summary", "esker"],
        sections: &[
            ("Purpose", "Keeps vendor records synchronized across systems."),
            ("Scope", "Covers intake, validation, and final updates."),
        ],
    },
    Page {
        title: "Automation Details",
        subtitle: "Scheduled scripts and their triggers",
        search_terms: &["automation", "python", "schedule", "script"],
        sections: &[
            ("Trigger", "A scheduled job polls the shared mailbox."),
            ("Processing", "Each message is parsed and validated in order."),
        ],
    },
    Page {
        title: "User Guide",
        subtitle: "Step-by-step usage instructions",
        search_terms: &["guide", "help", "quickstart", "walkthrough"],
        sections: &[
            ("Getting Started", "Open the form and fill the required fields."),
            ("Submitting", "Review the summary before sending the request."),
        ],
    },
];

fn matches(page: &Page, query: &str) -> bool {
    page.title.to_lowercase().contains(query)
        || page.subtitle.to_lowercase().contains(query)
        || page.search_terms.iter().any(|term| term.contains(query))
        || page.sections.iter().any(|(heading, body)| {
            heading.to_lowercase().contains(query) || body.to_lowercase().contains(query)
        })
}

fn bench_filter_hit(c: &mut Criterion) {
    c.bench_function("filter_query_with_match", |b| {
        b.iter(|| {
            PAGES
                .iter()
                .filter(|page| matches(page, black_box("python")))
                .count()
        })
    });
}

fn bench_filter_miss(c: &mut Criterion) {
    c.bench_function("filter_query_without_match", |b| {
        b.iter(|| {
            PAGES
                .iter()
                .filter(|page| matches(page, black_box("zzz-no-match")))
                .count()
        })
    });
}

fn bench_query_normalization(c: &mut Criterion) {
    c.bench_function("query_normalization", |b| {
        b.iter(|| black_box("  Python Script  ").trim().to_lowercase())
    });
}

criterion_group!(
    benches,
    bench_filter_hit,
    bench_filter_miss,
    bench_query_normalization
);
criterion_main!(benches);
