//! Japanese six-dot braille, braille to katakana
//!
//! Keys are one cell (base table, digits, Roman letters) or a prefix cell
//! followed by one cell. Dot numbers are noted next to each entry.

/// Single cells: kana, punctuation and the blank cell
///
/// No cell here maps to `＿` or `｜`, so with these tables only a blank in
/// front of ⠦ gives a foreign quote the two-cell closer. Substitute tables
/// that map a cell to either mark make it a closer context too.
pub const KANA: &[(&str, &str)] = &[
    ("⠁", "ア"), // 1
    ("⠃", "イ"), // 12
    ("⠉", "ウ"), // 14
    ("⠋", "エ"), // 124
    ("⠊", "オ"), // 24
    ("⠡", "カ"), // 16
    ("⠣", "キ"), // 126
    ("⠩", "ク"), // 146
    ("⠫", "ケ"), // 1246
    ("⠪", "コ"), // 246
    ("⠱", "サ"), // 156
    ("⠳", "シ"), // 1256
    ("⠹", "ス"), // 1456
    ("⠻", "セ"), // 12456
    ("⠺", "ソ"), // 2456
    ("⠕", "タ"), // 135
    ("⠗", "チ"), // 1235
    ("⠝", "ツ"), // 1345
    ("⠟", "テ"), // 12345
    ("⠞", "ト"), // 2345
    ("⠅", "ナ"), // 13
    ("⠇", "ニ"), // 123
    ("⠍", "ヌ"), // 134
    ("⠏", "ネ"), // 1234
    ("⠎", "ノ"), // 234
    ("⠥", "ハ"), // 136
    ("⠧", "ヒ"), // 1236
    ("⠭", "フ"), // 1346
    ("⠯", "ヘ"), // 12346
    ("⠮", "ホ"), // 2346
    ("⠵", "マ"), // 1356
    ("⠷", "ミ"), // 12356
    ("⠽", "ム"), // 13456
    ("⠿", "メ"), // 123456
    ("⠾", "モ"), // 23456
    ("⠑", "ラ"), // 15
    ("⠓", "リ"), // 125
    ("⠙", "ル"), // 145
    ("⠛", "レ"), // 1245
    ("⠚", "ロ"), // 245
    ("⠌", "ヤ"), // 34
    ("⠬", "ユ"), // 346
    ("⠜", "ヨ"), // 345
    ("⠄", "ワ"), // 3
    ("⠆", "ヰ"), // 23
    ("⠶", "（"), // 2356
    ("⠔", "ヲ"), // 35
    ("⠴", "ン"), // 356
    ("⠂", "ッ"), // 2
    ("⠒", "ー"), // 25
    ("⠀", "　"), // 0
    ("⠰", "、"), // 56
    ("⠲", "。"), // 256
    ("⠢", "？"), // 26
    ("⠖", "！"), // 235
    ("⠤", "「"), // 36
];

/// Voiced syllables, prefix ⠐ (dot 5)
pub const DAKUTEN: &[(&str, &str)] = &[
    ("⠐⠡", "ガ"), // 5-16
    ("⠐⠣", "ギ"), // 5-126
    ("⠐⠩", "グ"), // 5-146
    ("⠐⠫", "ゲ"), // 5-1246
    ("⠐⠪", "ゴ"), // 5-246
    ("⠐⠱", "ザ"), // 5-156
    ("⠐⠳", "ジ"), // 5-1256
    ("⠐⠹", "ズ"), // 5-1456
    ("⠐⠻", "ゼ"), // 5-12456
    ("⠐⠺", "ゾ"), // 5-2456
    ("⠐⠕", "ダ"), // 5-135
    ("⠐⠗", "ヂ"), // 5-1235
    ("⠐⠝", "ヅ"), // 5-1345
    ("⠐⠟", "デ"), // 5-12345
    ("⠐⠞", "ド"), // 5-2345
    ("⠐⠥", "バ"), // 5-136
    ("⠐⠧", "ビ"), // 5-1236
    ("⠐⠭", "ブ"), // 5-1346
    ("⠐⠯", "ベ"), // 5-12346
    ("⠐⠮", "ボ"), // 5-2346
    ("⠐⠉", "ヴ"), // 5-14
    ("⠐⠤", "【"), // 5-36
];

/// Semi-voiced syllables, prefix ⠠ (dot 6)
pub const HANDAKUTEN: &[(&str, &str)] = &[
    ("⠠⠥", "パ"), // 6-136
    ("⠠⠧", "ピ"), // 6-1236
    ("⠠⠭", "プ"), // 6-1346
    ("⠠⠯", "ペ"), // 6-12346
    ("⠠⠮", "ポ"), // 6-2346
];

/// Contracted sounds, prefix ⠈ (dot 4)
pub const YOUON: &[(&str, &str)] = &[
    ("⠈⠡", "キャ"), // 4-16
    ("⠈⠩", "キュ"), // 4-146
    ("⠈⠪", "キョ"), // 4-246
    ("⠈⠱", "シャ"), // 4-156
    ("⠈⠹", "シュ"), // 4-1456
    ("⠈⠺", "ショ"), // 4-2456
    ("⠈⠕", "チャ"), // 4-135
    ("⠈⠝", "チュ"), // 4-1345
    ("⠈⠞", "チョ"), // 4-2345
    ("⠈⠅", "ニャ"), // 4-13
    ("⠈⠍", "ニュ"), // 4-134
    ("⠈⠎", "ニョ"), // 4-234
    ("⠈⠥", "ヒャ"), // 4-136
    ("⠈⠭", "ヒュ"), // 4-1346
    ("⠈⠮", "ヒョ"), // 4-2346
    ("⠈⠵", "ミャ"), // 4-1356
    ("⠈⠽", "ミュ"), // 4-13456
    ("⠈⠾", "ミョ"), // 4-23456
    ("⠈⠑", "リャ"), // 4-15
    ("⠈⠙", "リュ"), // 4-145
    ("⠈⠚", "リョ"), // 4-245
    ("⠈⠋", "イェ"), // 4-124
    ("⠈⠫", "キェ"), // 4-1246
    ("⠈⠻", "シェ"), // 4-12456
    ("⠈⠟", "チェ"), // 4-12345
    ("⠈⠏", "ニェ"), // 4-1234
    ("⠈⠯", "ヒェ"), // 4-12346
    ("⠈⠗", "ティ"), // 4-1235
    ("⠈⠳", "スィ"), // 4-1256
];

/// Voiced contracted sounds, prefix ⠘ (dots 45)
pub const YOUON_DAKUTEN: &[(&str, &str)] = &[
    ("⠘⠡", "ギャ"), // 45-16
    ("⠘⠩", "ギュ"), // 45-146
    ("⠘⠪", "ギョ"), // 45-246
    ("⠘⠱", "ジャ"), // 45-156
    ("⠘⠹", "ジュ"), // 45-1456
    ("⠘⠺", "ジョ"), // 45-2456
    ("⠘⠕", "ヂャ"), // 45-135
    ("⠘⠝", "ヂュ"), // 45-1345
    ("⠘⠞", "ヂョ"), // 45-2345
    ("⠘⠥", "ビャ"), // 45-136
    ("⠘⠭", "ビュ"), // 45-1346
    ("⠘⠮", "ビョ"), // 45-2346
    ("⠘⠫", "ギェ"), // 45-1246
    ("⠘⠻", "ジェ"), // 45-12456
    ("⠘⠯", "ビェ"), // 45-12346
    ("⠘⠗", "ディ"), // 45-1235
    ("⠘⠳", "ズィ"), // 45-1256
];

/// Semi-voiced contracted sounds, prefix ⠨ (dots 46)
pub const YOUON_HANDAKUTEN: &[(&str, &str)] = &[
    ("⠨⠥", "ピャ"), // 46-136
    ("⠨⠭", "ピュ"), // 46-1346
    ("⠨⠮", "ピョ"), // 46-2346
    ("⠨⠯", "ピェ"), // 46-12346
    ("⠨⠝", "テュ"), // 46-1345
    ("⠨⠬", "フュ"), // 46-346
    ("⠨⠜", "フョ"), // 46-345
];

/// Voiced special sounds, prefix ⠸ (dots 456)
pub const DOTS_456: &[(&str, &str)] = &[
    ("⠸⠝", "デュ"), // 456-1345
    ("⠸⠬", "ヴュ"), // 456-346
    ("⠸⠜", "ヴョ"), // 456-345
];

/// Special sounds, prefix ⠢ (dots 26)
pub const SPECIAL: &[(&str, &str)] = &[
    ("⠢⠃", "ウィ"), // 26-12
    ("⠢⠋", "ウェ"), // 26-124
    ("⠢⠊", "ウォ"), // 26-24
    ("⠢⠡", "クァ"), // 26-16
    ("⠢⠣", "クィ"), // 26-126
    ("⠢⠫", "クェ"), // 26-1246
    ("⠢⠪", "クォ"), // 26-246
    ("⠢⠕", "ツァ"), // 26-135
    ("⠢⠗", "ツィ"), // 26-1235
    ("⠢⠟", "ツェ"), // 26-12345
    ("⠢⠞", "ツォ"), // 26-2345
    ("⠢⠥", "ファ"), // 26-136
    ("⠢⠧", "フィ"), // 26-1236
    ("⠢⠯", "フェ"), // 26-12346
    ("⠢⠮", "フォ"), // 26-2346
    ("⠢⠝", "トゥ"), // 26-1345
];

/// Voiced special sounds, prefix ⠲ (dots 256)
pub const SPECIAL_DAKUTEN: &[(&str, &str)] = &[
    ("⠲⠡", "グァ"), // 256-16
    ("⠲⠣", "グィ"), // 256-126
    ("⠲⠫", "グェ"), // 256-1246
    ("⠲⠪", "グォ"), // 256-246
    ("⠲⠕", "ヅァ"), // 256-135
    ("⠲⠗", "ヅィ"), // 256-1235
    ("⠲⠟", "ヅェ"), // 256-12345
    ("⠲⠞", "ヅォ"), // 256-2345
    ("⠲⠥", "ヴァ"), // 256-136
    ("⠲⠧", "ヴィ"), // 256-1236
    ("⠲⠯", "ヴェ"), // 256-12346
    ("⠲⠮", "ヴォ"), // 256-2346
    ("⠲⠝", "ドゥ"), // 256-1345
];

/// Fullwidth digits after the numeric prefix ⠼
pub const DIGITS: &[(&str, &str)] = &[
    ("⠚", "０"), // 245
    ("⠁", "１"), // 1
    ("⠃", "２"), // 12
    ("⠉", "３"), // 14
    ("⠙", "４"), // 145
    ("⠑", "５"), // 15
    ("⠋", "６"), // 124
    ("⠛", "７"), // 1245
    ("⠓", "８"), // 125
    ("⠊", "９"), // 24
    ("⠂", "．"), // 2
    ("⠄", "，"), // 3
];

/// Roman letters after ⠰, capitalised
pub const ROMAN_UPPER: &[(&str, &str)] = &[
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

/// Roman letters after ⠰
pub const ROMAN_LOWER: &[(&str, &str)] = &[
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
