//! How an operation's declared outputs map onto its flat output index space.
//!
//! A scalar output claims one index. A list output claims a run whose length
//! is only known once the operation exists, so it is queried by output name.
//! Runs are contiguous and follow declaration order.

use std::ops::Range;

use crate::catalog::OpDef;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputSlot<'a> {
    Single(&'a str),
    List(&'a str),
}

impl<'a> OutputSlot<'a> {
    pub fn name(self) -> &'a str {
        match self {
            OutputSlot::Single(name) | OutputSlot::List(name) => name,
        }
    }
}

#[derive(Debug, Clone)]
pub struct OutputLayout<'a> {
    slots: Vec<OutputSlot<'a>>,
}

impl<'a> OutputLayout<'a> {
    pub fn new(op: &'a OpDef) -> Self {
        let slots = op
            .output_arg
            .iter()
            .map(|arg| {
                if arg.is_list() {
                    OutputSlot::List(arg.name.as_str())
                } else {
                    OutputSlot::Single(arg.name.as_str())
                }
            })
            .collect();
        OutputLayout { slots }
    }

    pub fn slots(&self) -> &[OutputSlot<'a>] {
        &self.slots
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn has_list_output(&self) -> bool {
        self.slots.iter().any(|s| matches!(s, OutputSlot::List(_)))
    }

    /// Index range claimed by each output, in declaration order.
    ///
    /// `list_size` is asked for the length of each list output; its first
    /// error ends the walk and is returned as is.
    pub fn resolve<E>(
        &self,
        mut list_size: impl FnMut(&str) -> Result<usize, E>,
    ) -> Result<Vec<Range<usize>>, E> {
        let mut next = 0usize;
        let mut out = Vec::with_capacity(self.slots.len());
        for slot in &self.slots {
            let len = match *slot {
                OutputSlot::Single(_) => 1,
                OutputSlot::List(name) => list_size(name)?,
            };
            out.push(next..next + len);
            next += len;
        }
        Ok(out)
    }

    /// Output indices when no output is a list; `None` otherwise.
    pub fn static_indices(&self) -> Option<Vec<usize>> {
        let ranges = self.resolve(|_| Err(())).ok()?;
        Some(ranges.into_iter().map(|r| r.start).collect())
    }
}
