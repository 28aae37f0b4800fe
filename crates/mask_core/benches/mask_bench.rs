use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use mask_core::{Mask, MaskConfig, MaskedInput, SignificantSequence};

const PHONE: &str = "+7 (___) ___-__-__";
const CARD: &str = "#### #### #### ####";

fn phone_mask() -> Mask {
    Mask::new(PHONE, '_').expect("phone mask is valid")
}

fn long_mask(groups: usize) -> String {
    let mut template = String::with_capacity(groups * 5);
    for idx in 0..groups {
        if idx > 0 {
            template.push('-');
        }
        template.push_str("____");
    }
    template
}

fn bench_apply_phone(c: &mut Criterion) {
    let mask = phone_mask();
    let seq = SignificantSequence::from_raw("9008005544");
    c.bench_function("bench_apply_phone", |b| {
        b.iter(|| black_box(mask.apply(black_box(&seq))));
    });
}

fn bench_extract_conforming(c: &mut Criterion) {
    let mask = phone_mask();
    let value = "+7 (900) 800-55-44";
    c.bench_function("bench_extract_conforming", |b| {
        b.iter(|| black_box(mask.extract(black_box(value))));
    });
}

fn bench_extract_raw(c: &mut Criterion) {
    let mask = phone_mask();
    let value = "+7 (900) 8001-55-44_";
    c.bench_function("bench_extract_raw", |b| {
        b.iter(|| black_box(mask.extract(black_box(value))));
    });
}

fn bench_type_full_phone(c: &mut Criterion) {
    c.bench_function("bench_type_full_phone", |b| {
        b.iter_batched(
            || MaskedInput::new(MaskConfig::new(PHONE)).expect("phone mask is valid"),
            |mut field| {
                let mut caret = field.focus_caret();
                for digit in "9008005544".chars() {
                    let mut raw: Vec<char> = field.value().chars().collect();
                    raw.insert(caret, digit);
                    let raw: String = raw.into_iter().collect();
                    caret = field.on_raw_value_changed(&raw, caret + 1).caret();
                }
                black_box(field.value().len());
            },
            BatchSize::SmallInput,
        );
    });
}

fn bench_paste_card(c: &mut Criterion) {
    c.bench_function("bench_paste_card", |b| {
        b.iter_batched(
            || {
                MaskedInput::new(MaskConfig::new(CARD).placeholder_char('#'))
                    .expect("card mask is valid")
            },
            |mut field| {
                let st = field.on_paste(black_box("4111 1111 1111 1111"), 0, 0, CARD);
                black_box(st.caret());
            },
            BatchSize::SmallInput,
        );
    });
}

fn bench_backspace_long_mask(c: &mut Criterion) {
    let template = long_mask(256);
    let digits: String = std::iter::repeat("1234").take(256).collect();
    c.bench_function("bench_backspace_long_mask", |b| {
        b.iter_batched(
            || {
                let mut field =
                    MaskedInput::new(MaskConfig::new(template.clone())).expect("mask is valid");
                let blank = field.value().to_string();
                field.on_paste(&digits, 0, 0, &blank);
                field
            },
            |mut field| {
                let mut caret = field.mask().len();
                for _ in 0..64 {
                    caret = field.on_backspace(caret).caret();
                }
                black_box(caret);
            },
            BatchSize::LargeInput,
        );
    });
}

criterion_group!(
    benches,
    bench_apply_phone,
    bench_extract_conforming,
    bench_extract_raw,
    bench_type_full_phone,
    bench_paste_card,
    bench_backspace_long_mask
);
criterion_main!(benches);
