/// Language tags accepted by the Youdao API, with their display names.
pub static LANGUAGES: &[(&str, &str)] = &[
    ("zh-CHS", "中文"),
    ("ja", "日文"),
    ("EN", "英文"),
    ("ko", "韩文"),
    ("fr", "法文"),
    ("ru", "俄文"),
    ("pt", "葡萄牙文"),
    ("es", "西班牙文"),
    ("vi", "越南文"),
];

pub fn display_name(code: &str) -> Option<&'static str> {
    LANGUAGES
        .iter()
        .find(|(tag, _)| *tag == code)
        .map(|(_, name)| *name)
}
