//! Positional field layouts for the delimited quote feed.
//!
//! Each upstream record is a comma-separated field list whose column order
//! depends on the market and instrument class. The tables below are the
//! literal upstream contract: column positions are fixed, not inferred.

/// Semantic field within a delimited feed record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Open,
    PrevClose,
    Price,
    High,
    Low,
    Change,
    ChangePercent,
    Volume,
    Turnover,
    Date,
    Time,
}

/// Record layout, keyed by market and instrument class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordLayout {
    AShareIndex,
    AShareEquity,
    HongKongIndex,
    HongKongEquity,
}

const A_SHARE_INDEX: &[(Field, usize)] = &[
    (Field::Name, 0),
    (Field::Price, 1),
    (Field::Change, 2),
    (Field::ChangePercent, 3),
    (Field::Volume, 4),
    (Field::Turnover, 5),
];

const A_SHARE_EQUITY: &[(Field, usize)] = &[
    (Field::Name, 0),
    (Field::Open, 1),
    (Field::PrevClose, 2),
    (Field::Price, 3),
    (Field::High, 4),
    (Field::Low, 5),
    (Field::Volume, 8),
    (Field::Turnover, 9),
    (Field::Date, 30),
    (Field::Time, 31),
];

const HONG_KONG_INDEX: &[(Field, usize)] = &[
    (Field::Name, 1),
    (Field::Open, 2),
    (Field::PrevClose, 3),
    (Field::High, 4),
    (Field::Low, 5),
    (Field::Price, 6),
    (Field::Change, 7),
    (Field::ChangePercent, 8),
    (Field::Volume, 11),
    (Field::Turnover, 12),
];

// The HK equity feed transposes turnover and volume relative to the HK index
// layout. That is the upstream contract; do not "fix" it.
const HONG_KONG_EQUITY: &[(Field, usize)] = &[
    (Field::Name, 1),
    (Field::Open, 2),
    (Field::PrevClose, 3),
    (Field::High, 4),
    (Field::Low, 5),
    (Field::Price, 6),
    (Field::Change, 7),
    (Field::ChangePercent, 8),
    (Field::Turnover, 11),
    (Field::Volume, 12),
];

impl RecordLayout {
    fn table(&self) -> &'static [(Field, usize)] {
        match self {
            RecordLayout::AShareIndex => A_SHARE_INDEX,
            RecordLayout::AShareEquity => A_SHARE_EQUITY,
            RecordLayout::HongKongIndex => HONG_KONG_INDEX,
            RecordLayout::HongKongEquity => HONG_KONG_EQUITY,
        }
    }

    /// Column position of a semantic field, if the layout carries it.
    pub fn position(&self, field: Field) -> Option<usize> {
        self.table()
            .iter()
            .find(|(f, _)| *f == field)
            .map(|(_, idx)| *idx)
    }

    /// Multiplier that normalizes a field's upstream unit.
    ///
    /// The A-share index feed reports volume in lots (100 shares) and
    /// turnover in units of 万元 (10,000 yuan).
    pub fn unit_scale(&self, field: Field) -> f64 {
        match (self, field) {
            (RecordLayout::AShareIndex, Field::Volume) => 100.0,
            (RecordLayout::AShareIndex, Field::Turnover) => 10_000.0,
            _ => 1.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_a_share_index_positions() {
        let layout = RecordLayout::AShareIndex;
        assert_eq!(layout.position(Field::Name), Some(0));
        assert_eq!(layout.position(Field::Price), Some(1));
        assert_eq!(layout.position(Field::Change), Some(2));
        assert_eq!(layout.position(Field::ChangePercent), Some(3));
        assert_eq!(layout.position(Field::Volume), Some(4));
        assert_eq!(layout.position(Field::Turnover), Some(5));
        assert_eq!(layout.position(Field::Open), None);
    }

    #[test]
    fn test_a_share_equity_positions() {
        let layout = RecordLayout::AShareEquity;
        assert_eq!(layout.position(Field::Open), Some(1));
        assert_eq!(layout.position(Field::PrevClose), Some(2));
        assert_eq!(layout.position(Field::Price), Some(3));
        assert_eq!(layout.position(Field::Volume), Some(8));
        assert_eq!(layout.position(Field::Turnover), Some(9));
        assert_eq!(layout.position(Field::Date), Some(30));
        assert_eq!(layout.position(Field::Time), Some(31));
    }

    #[test]
    fn test_hk_equity_transposes_volume_and_turnover() {
        let index = RecordLayout::HongKongIndex;
        let equity = RecordLayout::HongKongEquity;

        assert_eq!(index.position(Field::Volume), Some(11));
        assert_eq!(index.position(Field::Turnover), Some(12));
        assert_eq!(equity.position(Field::Turnover), Some(11));
        assert_eq!(equity.position(Field::Volume), Some(12));
    }

    #[test]
    fn test_a_share_index_unit_scales() {
        let layout = RecordLayout::AShareIndex;
        assert_eq!(layout.unit_scale(Field::Volume), 100.0);
        assert_eq!(layout.unit_scale(Field::Turnover), 10_000.0);
        assert_eq!(layout.unit_scale(Field::Price), 1.0);
    }

    #[test]
    fn test_other_layouts_have_no_unit_scaling() {
        for layout in [
            RecordLayout::AShareEquity,
            RecordLayout::HongKongIndex,
            RecordLayout::HongKongEquity,
        ] {
            assert_eq!(layout.unit_scale(Field::Volume), 1.0);
            assert_eq!(layout.unit_scale(Field::Turnover), 1.0);
        }
    }
}
