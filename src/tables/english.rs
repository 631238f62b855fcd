//! English braille (grade 1) used between foreign quote marks ⠦ … ⠴

pub const UPPER: &[(&str, &str)] = &[
    ("⠁", "A"), // 1
    ("⠃", "B"), // 12
    ("⠉", "C"), // 14
    ("⠙", "D"), // 145
    ("⠑", "E"), // 15
    ("⠋", "F"), // 124
    ("⠛", "G"), // 1245
    ("⠓", "H"), // 125
    ("⠊", "I"), // 24
    ("⠚", "J"), // 245
    ("⠅", "K"), // 13
    ("⠇", "L"), // 123
    ("⠍", "M"), // 134
    ("⠝", "N"), // 1345
    ("⠕", "O"), // 135
    ("⠏", "P"), // 1234
    ("⠟", "Q"), // 12345
    ("⠗", "R"), // 1235
    ("⠎", "S"), // 234
    ("⠞", "T"), // 2345
    ("⠥", "U"), // 136
    ("⠧", "V"), // 1236
    ("⠺", "W"), // 2456
    ("⠭", "X"), // 1346
    ("⠽", "Y"), // 13456
    ("⠵", "Z"), // 1356
];

pub const LOWER: &[(&str, &str)] = &[
    ("⠁", "a"), // 1
    ("⠃", "b"), // 12
    ("⠉", "c"), // 14
    ("⠙", "d"), // 145
    ("⠑", "e"), // 15
    ("⠋", "f"), // 124
    ("⠛", "g"), // 1245
    ("⠓", "h"), // 125
    ("⠊", "i"), // 24
    ("⠚", "j"), // 245
    ("⠅", "k"), // 13
    ("⠇", "l"), // 123
    ("⠍", "m"), // 134
    ("⠝", "n"), // 1345
    ("⠕", "o"), // 135
    ("⠏", "p"), // 1234
    ("⠟", "q"), // 12345
    ("⠗", "r"), // 1235
    ("⠎", "s"), // 234
    ("⠞", "t"), // 2345
    ("⠥", "u"), // 136
    ("⠧", "v"), // 1236
    ("⠺", "w"), // 2456
    ("⠭", "x"), // 1346
    ("⠽", "y"), // 13456
    ("⠵", "z"), // 1356
];

/// Looked up before the letter tables, independent of case
pub const PUNCTUATION: &[(&str, &str)] = &[
    ("⠀", " "), // 0
    ("⠂", ","), // 2
    ("⠆", ";"), // 23
    ("⠒", ":"), // 25
    ("⠲", "."), // 256
    ("⠖", "!"), // 235
    ("⠦", "?"), // 236
    ("⠄", "'"), // 3
    ("⠤", "-"), // 36
];
