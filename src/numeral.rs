//! 数字本地化模块
//!
//! 在送入翻译之前，把识别文本中的数字串改写为该语言的口语读法：
//! 越南语使用长级数法（nghìn / triệu / tỷ），中文按位逐字读出。
//! 同时生成带原始数字注释的显示文本 `"<读法> (<数字>)"`。

use crate::types::Locale;

const VI_UNITS: [&str; 10] = [
    "không", "một", "hai", "ba", "bốn", "năm", "sáu", "bảy", "tám", "chín",
];

/// 一次改写得到的文本对
///
/// 不变量：两个成员在数字串以外逐字节相同，数字串的个数与顺序一致。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalizedText {
    /// 数字串替换为口语读法（送往翻译）
    pub plain: String,
    /// 数字串替换为 `"<读法> (<数字>)"`（展示给用户）
    pub annotated: String,
}

/// 越南语基数词读法
///
/// 规则要点（统一采用规范语法，见 DESIGN.md）：
/// - 20–99 的十位用 "mươi"，个位 1 读 "mốt"、5 读 "lăm"
/// - 11–19 保持 "mười một"，但 15 读 "mười lăm"
/// - 百位组内 1–9 的余数前加连接词 "lẻ"
/// - 单独的 1 和 5 永远读本词 "một" / "năm"
pub fn vn_cardinal(n: i64) -> String {
    if n < 0 {
        return match n.checked_neg() {
            Some(abs) => format!("âm {}", vn_cardinal(abs)),
            // i64::MIN 取反溢出，退回数字原样
            None => n.to_string(),
        };
    }

    match n {
        0..=9 => VI_UNITS[n as usize].to_string(),
        10 => "mười".to_string(),
        11..=19 => {
            let unit = (n - 10) as usize;
            let word = if unit == 5 { "lăm" } else { VI_UNITS[unit] };
            format!("mười {}", word)
        }
        20..=99 => {
            let tens = (n / 10) as usize;
            let unit = (n % 10) as usize;
            let head = format!("{} mươi", VI_UNITS[tens]);
            match unit {
                0 => head,
                1 => format!("{} mốt", head),
                5 => format!("{} lăm", head),
                _ => format!("{} {}", head, VI_UNITS[unit]),
            }
        }
        100..=999 => {
            let hundreds = (n / 100) as usize;
            let remainder = n % 100;
            let head = format!("{} trăm", VI_UNITS[hundreds]);
            match remainder {
                0 => head,
                1..=9 => format!("{} lẻ {}", head, vn_cardinal(remainder)),
                _ => format!("{} {}", head, vn_cardinal(remainder)),
            }
        }
        1_000..=999_999 => scaled(n, 1_000, "nghìn"),
        1_000_000..=999_999_999 => scaled(n, 1_000_000, "triệu"),
        _ => scaled(n, 1_000_000_000, "tỷ"),
    }
}

fn scaled(n: i64, scale: i64, word: &str) -> String {
    let quotient = n / scale;
    let remainder = n % scale;
    let head = format!("{} {}", vn_cardinal(quotient), word);
    if remainder == 0 {
        head
    } else {
        format!("{} {}", head, vn_cardinal(remainder))
    }
}

/// 中文按位读数：每个数字一对一映射为汉字，不做位值分组
///
/// 刻意的字面读法（如电话号码、房间号），不是中文数词语法。
pub fn zh_digits(digits: &str) -> String {
    digits
        .chars()
        .map(|ch| match ch {
            '0' => '零',
            '1' => '一',
            '2' => '二',
            '3' => '三',
            '4' => '四',
            '5' => '五',
            '6' => '六',
            '7' => '七',
            '8' => '八',
            '9' => '九',
            other => other,
        })
        .collect()
}

/// 把一段数字串转换为指定语言的读法
///
/// 全函数：无法处理的输入（英语、空串、超出 i64 的数字）原样返回。
pub fn localize_number(digits: &str, locale: Locale) -> String {
    if digits.is_empty() {
        return digits.to_string();
    }
    match locale {
        Locale::Vietnamese => match digits.parse::<i64>() {
            Ok(n) => vn_cardinal(n),
            Err(_) => digits.to_string(),
        },
        Locale::Chinese => zh_digits(digits),
        Locale::English => digits.to_string(),
    }
}

/// 扫描文本，把每个极大 ASCII 数字串同时替换进两个输出
///
/// 单趟构造 plain 与 annotated，两者的不变量由构造方式保证。
pub fn localize_text(text: &str, locale: Locale) -> LocalizedText {
    let mut plain = String::with_capacity(text.len());
    let mut annotated = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        if !ch.is_ascii_digit() {
            plain.push(ch);
            annotated.push(ch);
            continue;
        }

        let mut run = String::new();
        run.push(ch);
        while let Some(&next) = chars.peek() {
            if next.is_ascii_digit() {
                run.push(next);
                chars.next();
            } else {
                break;
            }
        }

        let words = localize_number(&run, locale);
        plain.push_str(&words);
        annotated.push_str(&words);
        annotated.push_str(" (");
        annotated.push_str(&run);
        annotated.push(')');
    }

    LocalizedText { plain, annotated }
}
