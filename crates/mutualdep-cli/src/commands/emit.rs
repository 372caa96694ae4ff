use mutualdep_composite::format_and_emit;

pub fn run(value: i64) {
    tracing::debug!(value, "emit");
    format_and_emit(value);
}
