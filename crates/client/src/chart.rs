//! Data behind the "students per state" chart.

use crate::form::format_qtd_alunos;
use crate::model::StateTotal;

/// One column of the chart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartPoint {
    pub uf: String,
    pub total_alunos: i64,
}

impl ChartPoint {
    /// Tooltip text shown over the column.
    pub fn tooltip(&self) -> String {
        format!(
            "UF: {}\nTotal Alunos: {}",
            self.uf,
            format_qtd_alunos(self.total_alunos)
        )
    }
}

impl From<StateTotal> for ChartPoint {
    fn from(total: StateTotal) -> Self {
        Self {
            uf: total.uf,
            total_alunos: total.total_alunos,
        }
    }
}

/// Chart points plus whether there is anything to show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartState {
    points: Vec<ChartPoint>,
    has_data: bool,
}

impl Default for ChartState {
    fn default() -> Self {
        Self {
            points: Vec::new(),
            has_data: true,
        }
    }
}

impl ChartState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the points with a fresh aggregation, in the server's order.
    pub fn load(&mut self, totals: Vec<StateTotal>) {
        self.points = totals.into_iter().map(ChartPoint::from).collect();
        self.has_data = !self.points.is_empty();
    }

    /// Records a failed fetch; the last points are kept.
    pub fn mark_failed(&mut self) {
        self.has_data = false;
    }

    pub fn points(&self) -> &[ChartPoint] {
        &self.points
    }

    /// False when the last fetch failed or returned nothing.
    pub fn has_data(&self) -> bool {
        self.has_data
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn total(uf: &str, total_alunos: i64) -> StateTotal {
        StateTotal {
            uf: uf.to_string(),
            total_alunos,
        }
    }

    #[test]
    fn load_keeps_server_order() {
        let mut chart = ChartState::new();
        chart.load(vec![total("SP", 15), total("RJ", 20)]);

        let ufs: Vec<_> = chart.points().iter().map(|p| p.uf.as_str()).collect();
        assert_eq!(ufs, vec!["SP", "RJ"]);
        assert!(chart.has_data());
    }

    #[test]
    fn empty_aggregation_has_no_data() {
        let mut chart = ChartState::new();
        chart.load(Vec::new());
        assert!(!chart.has_data());
    }

    #[test]
    fn failure_keeps_points_but_hides_them() {
        let mut chart = ChartState::new();
        chart.load(vec![total("SP", 15)]);
        chart.mark_failed();

        assert!(!chart.has_data());
        assert_eq!(chart.points().len(), 1);
    }

    #[test]
    fn tooltip_formats_total() {
        let point = ChartPoint::from(total("MG", 12500));
        assert_eq!(point.tooltip(), "UF: MG\nTotal Alunos: 12.500");
    }
}
