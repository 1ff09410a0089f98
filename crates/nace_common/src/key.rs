/// Frontend-neutral key identifiers.
///
/// Frontends translate their native key codes into this set; machines only
/// ever see `Key`.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Key {
    Num1,
    Num2,
    A,
    C,
    D,
    J,
    K,
    L,
    P,
    S,
    T,
    Left,
    Right,
    Space,
    Escape,
    None,
}
