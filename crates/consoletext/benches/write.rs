use criterion::{criterion_group, criterion_main, Criterion};
use consoletext::consoletty::opt::Options;
use consoletext::consoletty::AnsiTerminal;
use consoletext::{write, write_line, ConsoleColor, Decoration, StyleRequest};

pub fn run_benchmarks(c: &mut Criterion) {
    let options = Options::builder().auto_flush(false).build();
    let mut terminal = AnsiTerminal::with_options(std::io::sink(), options);

    let mut group = c.benchmark_group("styled-write");

    group.bench_function("plain", |b| {
        b.iter(|| write(&mut terminal, "plain", None, None, Decoration::None))
    });

    group.bench_function("bold-colors", |b| {
        b.iter(|| {
            write_line(
                &mut terminal,
                "Testing bold...",
                Some(ConsoleColor::Yellow),
                Some(ConsoleColor::DarkBlue),
                Decoration::Bold,
            )
        })
    });

    group.bench_function("by-name", |b| {
        b.iter(|| write(&mut terminal, "named", Some(ConsoleColor::Red), None, "underline"))
    });

    let request = StyleRequest::new("Testing stricken")
        .with_foreground(ConsoleColor::Red)
        .strikethrough();
    group.bench_function("request", |b| b.iter(|| request.write_line(&mut terminal)));

    group.finish();
}

criterion_group!(benches, run_benchmarks);
criterion_main!(benches);
