    // BEGIN SNIPPET sets DEPENDS ON range utils

    pub struct Sets;

    // END SNIPPET

// BEGIN SNIPPET range DEPENDS ON utils
// extra helper appended to the range snippet
pub fn clamp(i: usize, len: usize) -> usize { i.min(len) }
// END SNIPPET
