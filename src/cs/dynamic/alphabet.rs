//! Interning of sequence elements into dense symbol ids.
//!
//! Both operands share one alphabet, so equal elements get equal ids and the
//! engine's inner loop only ever compares and indexes `usize` values.

use std::collections::HashMap;
use std::hash::Hash;

use crate::cs::dynamic::sequence::Sequence;
use crate::error::{Error, Operand, Result};

/// Interns `a` and `b` using hashing, writing their symbol ids into `left` and
/// `right`. Returns the number of distinct symbols.
pub fn intern_hashed<'s, T, A, B>(
    a: &'s A,
    b: &'s B,
    left: &mut Vec<usize>,
    right: &mut Vec<usize>,
) -> usize
where
    T: Eq + Hash + 's,
    A: Sequence<Element = T> + ?Sized,
    B: Sequence<Element = T> + ?Sized,
{
    let mut symbols: HashMap<&'s T, usize> = HashMap::with_capacity(a.len() + b.len());
    hash_into(a, &mut symbols, left);
    hash_into(b, &mut symbols, right);
    symbols.len()
}

fn hash_into<'s, T, S>(seq: &'s S, symbols: &mut HashMap<&'s T, usize>, out: &mut Vec<usize>)
where
    T: Eq + Hash + 's,
    S: Sequence<Element = T> + ?Sized,
{
    out.clear();
    out.reserve(seq.len());
    for index in 0..seq.len() {
        let next = symbols.len();
        out.push(*symbols.entry(seq.element(index)).or_insert(next));
    }
}

/// Interns `a` and `b` with nothing but `PartialEq`, scanning the symbols seen
/// so far for each element (O(k) per element for an alphabet of size k).
///
/// Every element must be equal to itself; the first one that is not is
/// reported as [`Error::InvalidElement`] and no ids are produced.
pub fn intern_scanned<'s, T, A, B>(
    a: &'s A,
    b: &'s B,
    left: &mut Vec<usize>,
    right: &mut Vec<usize>,
) -> Result<usize>
where
    T: PartialEq + 's,
    A: Sequence<Element = T> + ?Sized,
    B: Sequence<Element = T> + ?Sized,
{
    let mut symbols: Vec<&'s T> = Vec::new();
    scan_into(a, Operand::First, &mut symbols, left)?;
    scan_into(b, Operand::Second, &mut symbols, right)?;
    Ok(symbols.len())
}

fn scan_into<'s, T, S>(
    seq: &'s S,
    operand: Operand,
    symbols: &mut Vec<&'s T>,
    out: &mut Vec<usize>,
) -> Result<()>
where
    T: PartialEq + 's,
    S: Sequence<Element = T> + ?Sized,
{
    out.clear();
    out.reserve(seq.len());
    for index in 0..seq.len() {
        let element = seq.element(index);
        if !is_reflexive(element) {
            out.clear();
            return Err(Error::InvalidElement { operand, index });
        }
        let id = match symbols.iter().position(|&symbol| symbol == element) {
            Some(id) => id,
            None => {
                symbols.push(element);
                symbols.len() - 1
            }
        };
        out.push(id);
    }
    Ok(())
}

#[allow(clippy::eq_op)]
fn is_reflexive<T: PartialEq>(element: &T) -> bool {
    element == element
}
