//! Benchmarks for markdown tag parsing.

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use overmark::document::parse_tags;

const MEDIUM: &str = "\
# Notes

Some *emphasis*, **strong** text, ~~strikethrough~~ and `inline code`.

- first item
- second item with a [link](https://example.com)
- [ ] open task
- [x] done task

1. ordered one
2. ordered two

> a block quote

```rust
fn main() {}
```

---
";

fn bench_parse_simple(c: &mut Criterion) {
    let md = "# Hello\n\nWorld";
    c.bench_function("parse_simple", |b| b.iter(|| parse_tags(black_box(md))));
}

fn bench_parse_medium(c: &mut Criterion) {
    c.bench_function("parse_medium", |b| b.iter(|| parse_tags(black_box(MEDIUM))));
}

criterion_group!(benches, bench_parse_simple, bench_parse_medium);
criterion_main!(benches);
