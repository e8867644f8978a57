use std::collections::{HashMap, HashSet, VecDeque};

/// The guesser's root process and every descendant alive at discovery time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessTree {
    root: u32,
    descendants: Vec<u32>,
}

impl ProcessTree {
    /// Walks the parent links breadth first starting at `root`.
    /// Returns `None` when `root` is not in the snapshot.
    pub fn discover(root: u32, snapshot: &[(u32, Option<u32>)]) -> Option<Self> {
        if !snapshot.iter().any(|(pid, _)| *pid == root) {
            return None;
        }

        let mut children: HashMap<u32, Vec<u32>> = HashMap::new();
        for (pid, parent) in snapshot {
            if let Some(parent) = parent {
                if parent != pid {
                    children.entry(*parent).or_default().push(*pid);
                }
            }
        }
        for list in children.values_mut() {
            list.sort_unstable();
        }

        let mut descendants = Vec::new();
        let mut seen = HashSet::from([root]);
        let mut queue = VecDeque::from([root]);
        while let Some(pid) = queue.pop_front() {
            for child in children.get(&pid).into_iter().flatten() {
                if seen.insert(*child) {
                    descendants.push(*child);
                    queue.push_back(*child);
                }
            }
        }

        Some(Self { root, descendants })
    }

    pub fn root(&self) -> u32 {
        self.root
    }

    pub fn descendants(&self) -> &[u32] {
        &self.descendants
    }

    /// Descendants first, root last.
    pub fn kill_order(&self) -> impl Iterator<Item = u32> + '_ {
        self.descendants
            .iter()
            .copied()
            .chain(std::iter::once(self.root))
    }
}
