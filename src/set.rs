/* A set in the discrete math sense. Set operations never touch their operands, they always
 * allocate and return a fresh set so the result shares nothing with the inputs. */

use crate::pair::OrderedPair;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::hash_set::{IntoIter, Iter};
use std::collections::HashSet;
use std::fmt;
use std::hash::{DefaultHasher, Hash, Hasher};

#[derive(Debug, Clone)]
pub struct DiscreteSet<E> {
    elements: HashSet<E>,
}

impl<E> Default for DiscreteSet<E> {
    fn default() -> Self {
        DiscreteSet {
            elements: HashSet::new(),
        }
    }
}

impl<E: Eq + Hash> DiscreteSet<E> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an element to the set. Returns true if the element was not already present.
    pub fn add(&mut self, element: E) -> bool {
        self.elements.insert(element)
    }

    /// Remove an element from the set. Returns true if the element was present.
    pub fn remove(&mut self, element: &E) -> bool {
        self.elements.remove(element)
    }

    pub fn contains(&self, element: &E) -> bool {
        self.elements.contains(element)
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn clear(&mut self) {
        self.elements.clear();
    }

    /// Iterate over the elements. The order is unspecified.
    pub fn iter(&self) -> Iter<'_, E> {
        self.elements.iter()
    }

    /// True if every element of this set is also in `other`
    pub fn is_subset_of(&self, other: &DiscreteSet<E>) -> bool {
        self.iter().all(|element| other.contains(element))
    }
}

impl<E: Eq + Hash + Clone> DiscreteSet<E> {
    /// Every element present in either set
    pub fn union(&self, other: &DiscreteSet<E>) -> DiscreteSet<E> {
        let mut result = self.clone();
        result.extend(other.iter().cloned());
        result
    }

    /// Only the elements present in both sets
    pub fn intersect(&self, other: &DiscreteSet<E>) -> DiscreteSet<E> {
        self.iter()
            .filter(|element| other.contains(element))
            .cloned()
            .collect()
    }

    /// The cartesian product of the two sets. Holds `self.len() * other.len()` pairs.
    pub fn cross<F: Eq + Hash + Clone>(
        &self,
        other: &DiscreteSet<F>,
    ) -> DiscreteSet<OrderedPair<E, F>> {
        let mut product = DiscreteSet::new();
        for first in self {
            for second in other {
                product.add(OrderedPair::new(first.clone(), second.clone()));
            }
        }
        product
    }

    /// Build the set of all subsets, the empty set and the full set included.
    ///
    /// Starts from `{∅}` and for each element keeps every subset built so far together with a
    /// copy of it extended by that element, so the collection doubles per element and ends at
    /// `2^n` subsets. The cost is exponential and there is no size guard, bounding the input is
    /// up to the caller.
    pub fn power_set(&self) -> DiscreteSet<DiscreteSet<E>> {
        let mut power_set = DiscreteSet::new();
        power_set.add(DiscreteSet::new());

        for element in self {
            let mut next_power_set = DiscreteSet::new();

            for subset in power_set {
                let mut extended = subset.clone();
                extended.add(element.clone());
                next_power_set.add(subset);
                next_power_set.add(extended);
            }
            power_set = next_power_set;
        }
        power_set
    }
}

// Set equality is mutual inclusion, independent of how the elements were inserted.
impl<E: Eq + Hash> PartialEq for DiscreteSet<E> {
    fn eq(&self, other: &Self) -> bool {
        self.is_subset_of(other) && other.is_subset_of(self)
    }
}

impl<E: Eq + Hash> Eq for DiscreteSet<E> {}

/// Order independent hash so that sets of sets work. Each element is hashed on its own and the
/// results are summed, which gives the same value for equal sets whatever the iteration order.
impl<E: Eq + Hash> Hash for DiscreteSet<E> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let combined = self.iter().fold(0u64, |acc, element| {
            let mut hasher = DefaultHasher::new();
            element.hash(&mut hasher);
            acc.wrapping_add(hasher.finish())
        });
        state.write_usize(self.len());
        state.write_u64(combined);
    }
}

impl<E: Eq + Hash> FromIterator<E> for DiscreteSet<E> {
    fn from_iter<I: IntoIterator<Item = E>>(iter: I) -> Self {
        DiscreteSet {
            elements: iter.into_iter().collect(),
        }
    }
}

impl<E: Eq + Hash> Extend<E> for DiscreteSet<E> {
    fn extend<I: IntoIterator<Item = E>>(&mut self, iter: I) {
        self.elements.extend(iter);
    }
}

impl<E> IntoIterator for DiscreteSet<E> {
    type Item = E;
    type IntoIter = IntoIter<E>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.into_iter()
    }
}

impl<'a, E> IntoIterator for &'a DiscreteSet<E> {
    type Item = &'a E;
    type IntoIter = Iter<'a, E>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}

impl<E: Eq + Hash> From<Vec<E>> for DiscreteSet<E> {
    fn from(elements: Vec<E>) -> Self {
        elements.into_iter().collect()
    }
}

impl<E: Eq + Hash, const N: usize> From<[E; N]> for DiscreteSet<E> {
    fn from(elements: [E; N]) -> Self {
        elements.into_iter().collect()
    }
}

impl<E: fmt::Display> fmt::Display for DiscreteSet<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let elements: Vec<String> = self.elements.iter().map(|e| e.to_string()).collect();
        write!(f, "{{{}}}", elements.join(", "))
    }
}

impl<E: Serialize> Serialize for DiscreteSet<E> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_seq(self.elements.iter())
    }
}

// Duplicates in the incoming sequence collapse into a single element.
impl<'de, E: Deserialize<'de> + Eq + Hash> Deserialize<'de> for DiscreteSet<E> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let elements: Vec<E> = Vec::deserialize(deserializer)?;
        Ok(elements.into_iter().collect())
    }
}
