/// Seven-stage gallows drawing keyed by the mistake count.
const STAGES: [&str; 7] = [
    r#"
  ┌─────┐
  │     │
  │
  │
  │
  │
══╧═════════
"#,
    r#"
  ┌─────┐
  │     │
  │     O
  │
  │
  │
══╧═════════
"#,
    r#"
  ┌─────┐
  │     │
  │     O
  │     │
  │     │
  │
══╧═════════
"#,
    r#"
  ┌─────┐
  │     │
  │     O
  │    /│
  │     │
  │
══╧═════════
"#,
    r#"
  ┌─────┐
  │     │
  │     O
  │    /│\
  │     │
  │
══╧═════════
"#,
    r#"
  ┌─────┐
  │     │
  │     O
  │    /│\
  │     │
  │    /
══╧═════════
"#,
    r#"
  ┌─────┐
  │     │
  │     O
  │    /│\
  │     │
  │    / \
══╧═════════
"#,
];

pub fn stage(mistakes: u8) -> &'static str {
    let i = (mistakes as usize).min(STAGES.len() - 1);
    STAGES[i]
}
