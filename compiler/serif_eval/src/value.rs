//! Runtime values.
//!
//! Numbers and strings are plain data. Arrays alias: cloning a
//! [`Value::Array`] shares its cells, so a store through one handle is seen
//! through every other. Closures are shared behind an `Rc` but are copied
//! whenever an identifier reads one (see [`Closure::deep_copy`]).
//!
//! An array may hold itself, directly or through inner arrays. Deep copies
//! reproduce such cycles, rendering prints a revisited array as `{...}`.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use rustc_hash::FxHashMap;
use serif_ir::Expr;
use serif_stack::ensure_sufficient_stack;

use crate::errors::{index_out_of_bounds, RuntimeError};
use crate::shared::Shared;
use crate::Environment;

/// A Serif value.
#[derive(Clone, Debug)]
pub enum Value {
    Number(i64),
    Str(String),
    Closure(Rc<Closure>),
    Array(Array),
}

impl Value {
    pub fn string(text: impl Into<String>) -> Self {
        Value::Str(text.into())
    }

    /// Kind name used in error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Number(_) => "number",
            Value::Str(_) => "string",
            Value::Closure(_) => "closure",
            Value::Array(_) => "array",
        }
    }

    /// Copy with fresh storage for every nested array.
    ///
    /// Used to initialise array cells, so no two cells share an inner array.
    #[must_use]
    pub fn deep_copy(&self) -> Value {
        self.deep_copy_in(&mut CopyMemo::default())
    }

    /// Deep copy that reuses the copies already recorded in `memo`, so
    /// arrays reached twice stay aliased in the copy.
    pub(crate) fn deep_copy_in(&self, memo: &mut CopyMemo) -> Value {
        match self {
            Value::Array(array) => Value::Array(array.deep_copy_in(memo)),
            other => other.clone(),
        }
    }

    /// An N-dimensional array with every cell a deep copy of `fill`.
    ///
    /// With no extents left this is `fill` itself.
    pub fn filled(extents: &[usize], fill: &Value) -> Value {
        match extents.split_first() {
            None => fill.deep_copy(),
            Some((&len, rest)) => {
                let cells = (0..len).map(|_| Value::filled(rest, fill)).collect();
                Value::Array(Array::from_values(cells))
            }
        }
    }
}

type CellsAddr = *const RefCell<Vec<Value>>;

/// Arrays already copied during one deep copy, keyed by source storage.
#[derive(Default)]
pub(crate) struct CopyMemo {
    copies: FxHashMap<CellsAddr, Array>,
}

/// Structural equality; closures compare by identity.
///
/// A pair of arrays met again while comparing them is taken as equal, so
/// cyclic arrays compare without looping.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        values_eq(self, other, &mut Vec::new())
    }
}

fn values_eq(a: &Value, b: &Value, comparing: &mut Vec<(CellsAddr, CellsAddr)>) -> bool {
    match (a, b) {
        (Value::Number(a), Value::Number(b)) => a == b,
        (Value::Str(a), Value::Str(b)) => a == b,
        (Value::Closure(a), Value::Closure(b)) => Rc::ptr_eq(a, b),
        (Value::Array(a), Value::Array(b)) => {
            let pair = (a.cells.addr(), b.cells.addr());
            if a.ptr_eq(b) || comparing.contains(&pair) {
                return true;
            }
            comparing.push(pair);
            let equal = {
                let (left, right) = (a.cells.borrow(), b.cells.borrow());
                left.len() == right.len()
                    && left
                        .iter()
                        .zip(right.iter())
                        .all(|(x, y)| values_eq(x, y, comparing))
            };
            comparing.pop();
            equal
        }
        _ => false,
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_value(f, self, &mut Vec::new())
    }
}

fn write_value(
    f: &mut fmt::Formatter<'_>,
    value: &Value,
    open: &mut Vec<CellsAddr>,
) -> fmt::Result {
    match value {
        Value::Number(n) => write!(f, "{n}"),
        Value::Str(s) => f.write_str(s),
        Value::Closure(closure) => write!(f, "closure({})", closure.params.join(", ")),
        Value::Array(array) => {
            let addr = array.cells.addr();
            if open.contains(&addr) {
                return f.write_str("{...}");
            }
            open.push(addr);
            f.write_str("{")?;
            for (i, cell) in array.cells.borrow().iter().enumerate() {
                if i > 0 {
                    f.write_str(",")?;
                }
                write_value(f, cell, open)?;
            }
            open.pop();
            f.write_str("}")
        }
    }
}

/// A function value: parameters, body and the environment it was defined in.
#[derive(Clone, Debug)]
pub struct Closure {
    /// Name the function was defined under; bound inside every call so the
    /// body can recurse.
    pub name: Option<String>,
    pub params: Vec<String>,
    pub body: Rc<Expr>,
    pub env: Environment,
}

impl Closure {
    /// A copy with an independent captured environment.
    #[must_use]
    pub fn deep_copy(&self) -> Closure {
        Closure {
            name: self.name.clone(),
            params: self.params.clone(),
            body: Rc::clone(&self.body),
            env: self.env.clone(),
        }
    }
}

/// One dimension of an array. Inner dimensions are arrays stored as cells.
#[derive(Clone, Debug, Default)]
pub struct Array {
    cells: Shared<Vec<Value>>,
}

impl Array {
    pub fn from_values(values: Vec<Value>) -> Self {
        Array {
            cells: Shared::new(values),
        }
    }

    pub fn len(&self) -> usize {
        self.cells.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.borrow().is_empty()
    }

    /// Whether both handles alias the same cells.
    pub fn ptr_eq(&self, other: &Array) -> bool {
        self.cells.ptr_eq(&other.cells)
    }

    pub fn get(&self, index: i64) -> Result<Value, RuntimeError> {
        let cells = self.cells.borrow();
        let slot = checked_index(index, cells.len())?;
        Ok(cells[slot].clone())
    }

    pub fn set(&self, index: i64, value: Value) -> Result<(), RuntimeError> {
        let mut cells = self.cells.borrow_mut();
        let slot = checked_index(index, cells.len())?;
        cells[slot] = value;
        Ok(())
    }

    /// A copy with fresh storage at every level.
    #[must_use]
    pub fn deep_copy(&self) -> Array {
        self.deep_copy_in(&mut CopyMemo::default())
    }

    /// The copy is recorded before its cells are filled, so a cell that
    /// leads back to this array gets the copy itself.
    pub(crate) fn deep_copy_in(&self, memo: &mut CopyMemo) -> Array {
        let addr = self.cells.addr();
        if let Some(copy) = memo.copies.get(&addr) {
            return copy.clone();
        }
        let copy = Array::from_values(Vec::new());
        memo.copies.insert(addr, copy.clone());
        let cells: Vec<Value> = ensure_sufficient_stack(|| {
            self.cells
                .borrow()
                .iter()
                .map(|cell| cell.deep_copy_in(memo))
                .collect()
        });
        *copy.cells.borrow_mut() = cells;
        copy
    }
}

/// Negative indices are out of bounds just like indices past the end.
fn checked_index(index: i64, len: usize) -> Result<usize, RuntimeError> {
    usize::try_from(index)
        .ok()
        .filter(|&slot| slot < len)
        .ok_or_else(|| index_out_of_bounds(index, len))
}
