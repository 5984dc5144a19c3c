/// Pick the display form that agrees with `value` under three-form plural
/// rules (one/few/many, as used by Russian and other Slavic locales).
///
/// `plural_form(1, ..)` and `plural_form(21, ..)` yield `one`,
/// `plural_form(3, ..)` yields `few`, while 0, 5..=20 and the teens of any
/// hundred yield `many`.
pub fn plural_form<'a>(value: u64, one: &'a str, few: &'a str, many: &'a str) -> &'a str {
    if value % 10 == 1 && value % 100 != 11 && value != 0 {
        one
    } else if (2..=4).contains(&(value % 10)) && !(10..20).contains(&(value % 100)) && value != 0 {
        few
    } else {
        many
    }
}
