use serde::Deserialize;

/// Digit-clustering rule for the integer part.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Deserialize)]
pub enum GroupingStyle {
    /// `1,234,567`
    #[default]
    #[serde(rename = "standard-3")]
    Standard3,
    /// Indian lakh/crore grouping: `12,34,567`
    #[serde(rename = "india-2")]
    India2,
    /// Indian grouping that restarts after each crore: `123,45,67,890`
    #[serde(rename = "india-2-scaled")]
    India2Scaled,
    /// East Asian myriad grouping: `123,4567`
    #[serde(rename = "china-4")]
    China4,
}

impl GroupingStyle {
    /// Group widths, rightmost group first. The iterator never ends.
    pub fn group_sizes(self) -> GroupSizes {
        GroupSizes {
            style: self,
            index: 0,
        }
    }
}

/// Iterator over group widths produced by [`GroupingStyle::group_sizes`].
#[derive(Clone, Debug)]
pub struct GroupSizes {
    style: GroupingStyle,
    index: usize,
}

impl Iterator for GroupSizes {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        let i = self.index;
        self.index += 1;
        Some(match self.style {
            GroupingStyle::Standard3 => 3,
            GroupingStyle::India2 if i == 0 => 3,
            GroupingStyle::India2 => 2,
            GroupingStyle::India2Scaled if i % 3 == 0 => 3,
            GroupingStyle::India2Scaled => 2,
            GroupingStyle::China4 => 4,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn first(style: GroupingStyle, n: usize) -> Vec<usize> {
        style.group_sizes().take(n).collect()
    }

    #[test]
    fn group_widths_per_style() {
        assert_eq!(first(GroupingStyle::Standard3, 3), [3, 3, 3]);
        assert_eq!(first(GroupingStyle::India2, 4), [3, 2, 2, 2]);
        assert_eq!(first(GroupingStyle::India2Scaled, 7), [3, 2, 2, 3, 2, 2, 3]);
        assert_eq!(first(GroupingStyle::China4, 2), [4, 4]);
    }
}
