#![no_main]

use libfuzzer_sys::fuzz_target;
use mask_core::{Direction, Edit, MaskConfig, MaskedInput, SelectionRange};

const MASKS: &[(&str, char)] = &[
    ("+7 (___) ___-__-__", '_'),
    ("__.__.____", '_'),
    ("#### #### #### ####", '#'),
    ("(___) 555-____", '_'),
    ("№ ___/__", '_'),
];

// Byte layout: [mask selector][op, a, b, len, text...]*
fuzz_target!(|data: &[u8]| {
    let Some((&selector, mut rest)) = data.split_first() else {
        return;
    };
    let (template, placeholder) = MASKS[selector as usize % MASKS.len()];
    let Ok(mut field) = MaskedInput::new(MaskConfig::new(template).placeholder_char(placeholder))
    else {
        return;
    };
    let len = field.mask().len();

    while rest.len() >= 4 {
        let (head, tail) = rest.split_at(4);
        let [op, a, b, text_len] = [head[0], head[1], head[2], head[3]];
        let take = (text_len as usize).min(tail.len());
        let (text, tail) = tail.split_at(take);
        rest = tail;
        let text = String::from_utf8_lossy(text).into_owned();
        let a = a as usize;
        let b = b as usize;

        let edit = match op % 5 {
            0 => Edit::Insert { raw: text, caret: a },
            1 => Edit::Delete {
                direction: Direction::Backward,
                caret: a,
            },
            2 => Edit::Delete {
                direction: Direction::Forward,
                caret: a,
            },
            3 => Edit::Paste {
                text,
                selection: SelectionRange::new(a, b),
            },
            _ => Edit::Reset,
        };

        let st = field.apply(edit).clone();
        assert_eq!(st.char_len(), len);
        assert!(st.selection_start <= st.selection_end);
        assert!(st.selection_end <= len);
        let mask = field.mask();
        assert_eq!(mask.apply(&mask.extract(&st.value)), st.value);
    }
});
