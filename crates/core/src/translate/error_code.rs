//! Youdao `errorCode` values and their messages.

pub static ERROR_CODES: &[(&str, &str)] = &[
    ("101", "缺少必填的参数"),
    ("102", "不支持的语言类型"),
    ("103", "翻译文本过长"),
    ("104", "不支持的API类型"),
    ("105", "不支持的签名类型"),
    ("106", "不支持的响应类型"),
    ("107", "不支持的传输加密类型"),
    ("108", "appKey无效"),
    ("109", "batchLog格式不正确"),
    ("110", "无相关服务的有效实例"),
    ("111", "开发者账号无效"),
    ("113", "q不能为空"),
    ("201", "解密失败，可能为DES,BASE64,URLDecode的错误"),
    ("202", "签名检验失败"),
    ("203", "访问IP地址不在可访问IP列表"),
    ("205", "请求的接口与应用的平台类型不一致"),
    ("301", "辞典查询失败"),
    ("302", "翻译查询失败"),
    ("303", "服务端的其它异常"),
    ("401", "账户已经欠费"),
    ("411", "访问频率受限,请稍后访问"),
    ("412", "长请求过于频繁，请稍后访问"),
];

/// Table lookup. Unknown codes map to an empty string.
pub fn message(code: &str) -> &'static str {
    ERROR_CODES
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, msg)| *msg)
        .unwrap_or("")
}

/// User-facing text for an API error: the table message, or the raw code when
/// the table has nothing for it.
pub fn describe(code: &str, message: &str) -> String {
    if message.is_empty() {
        format!("未知错误码: {code}")
    } else {
        message.to_owned()
    }
}
