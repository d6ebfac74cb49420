use time::Date;

pub fn format_usd(amount: f64) -> String {
    format!("${}", group_integer(&format!("{amount:.0}")))
}

pub fn format_count(value: f64) -> String {
    let rounded = format!("{value:.1}");
    let (integer, fraction) = rounded
        .split_once('.')
        .expect("fixed-point format always carries a fraction");

    format!("{}.{}", group_integer(integer), fraction)
}

pub fn format_whole(value: f64) -> String {
    group_integer(&format!("{:.0}", value.trunc()))
}

pub fn format_year_month(date: Date) -> String {
    format!("{:04}-{:02}", date.year(), u8::from(date.month()))
}

fn group_integer(raw: &str) -> String {
    let (sign, digits) = match raw.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", raw),
    };

    let mut grouped = String::with_capacity(sign.len() + digits.len() + digits.len() / 3);
    grouped.push_str(sign);
    for (index, ch) in digits.chars().enumerate() {
        if index != 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    grouped
}
