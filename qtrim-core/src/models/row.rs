///
/// One raw read as handed from the reader to a counter: the bytes of its quality line
/// and its position in the input (used only for error reporting).
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub index: usize,
    pub data: Vec<u8>,
}

impl Row {
    pub fn new(index: usize, data: Vec<u8>) -> Self {
        Self { index, data }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}
