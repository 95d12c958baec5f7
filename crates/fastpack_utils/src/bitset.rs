/// Fixed-width bit set used to record which entry points can reach a module.
/// Two modules reachable from exactly the same entries compare equal.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BitSet {
  entries: Box<[u8]>,
}

impl BitSet {
  pub fn new(max_bit_count: u32) -> Self {
    Self { entries: vec![0; max_bit_count.div_ceil(8) as usize].into_boxed_slice() }
  }

  pub fn set_bit(&mut self, bit: u32) {
    let index = (bit / 8) as usize;
    self.entries[index] |= 1 << (bit & 7);
  }

  pub fn has_bit(&self, bit: u32) -> bool {
    let index = (bit / 8) as usize;
    self.entries.get(index).is_some_and(|byte| byte & (1 << (bit & 7)) != 0)
  }

  pub fn count_ones(&self) -> u32 {
    self.entries.iter().map(|byte| byte.count_ones()).sum()
  }

  pub fn is_empty(&self) -> bool {
    self.entries.iter().all(|byte| *byte == 0)
  }
}

#[cfg(test)]
mod tests {
  use super::BitSet;

  #[test]
  fn set_and_query() {
    let mut bits = BitSet::new(10);
    assert!(bits.is_empty());
    bits.set_bit(0);
    bits.set_bit(9);
    assert!(bits.has_bit(0));
    assert!(!bits.has_bit(1));
    assert!(bits.has_bit(9));
    assert_eq!(bits.count_ones(), 2);
  }

  #[test]
  fn equal_signatures_compare_equal() {
    let mut a = BitSet::new(16);
    let mut b = BitSet::new(16);
    a.set_bit(3);
    a.set_bit(12);
    b.set_bit(12);
    b.set_bit(3);
    assert_eq!(a, b);
  }
}
