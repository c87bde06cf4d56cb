// src/generation/stats.rs

use crate::mission::Mission;
use crate::models::GroupKind;

/// 国・種別ごとの集計行
#[derive(Debug, Clone, PartialEq)]
pub struct StatsRow {
    pub side: &'static str,
    pub country: String,
    pub kind: GroupKind,
    pub groups: usize,
    pub units: usize,
}

/// ミッション内のグループ数・ユニット数を集計する（空の種別は省く）
pub fn collect_stats(mission: &Mission) -> Vec<StatsRow> {
    let mut rows = Vec::new();
    for coalition in &mission.coalitions {
        for country in &coalition.countries {
            for kind in GroupKind::ALL {
                let groups = country.groups(kind).len();
                if groups == 0 {
                    continue;
                }
                rows.push(StatsRow {
                    side: coalition.side.as_str(),
                    country: country.name.clone(),
                    kind,
                    groups,
                    units: country.unit_count(kind),
                });
            }
        }
    }
    rows
}

/// 集計表の作成
pub fn create_stats_table(rows: &[StatsRow]) -> String {
    let mut table = format!("{:<6}{:<16}{:<12}{:>8}{:>8}\n", "side", "country", "kind", "groups", "units");

    for row in rows {
        table.push_str(&format!(
            "{:<6}{:<16}{:<12}{:>8}{:>8}\n",
            row.side,
            row.country,
            row.kind.key(),
            row.groups,
            row.units
        ));
    }

    // 合計行
    let groups: usize = rows.iter().map(|r| r.groups).sum();
    let units: usize = rows.iter().map(|r| r.units).sum();
    table.push_str(&format!("{:<34}{:>8}{:>8}\n", "total", groups, units));
    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::Point;
    use crate::models::unit_type::FUEL_TRUCK_ATZ_10;

    #[test]
    fn test_collect_stats() {
        let mut mission = Mission::new("caucasus");
        let convoy = mission.vehicle_group_platoon("Oil Convoy", &[FUEL_TRUCK_ATZ_10; 5], Point::new(0.0, 0.0), 0.0);
        mission.add_group("Abkhazia", convoy).unwrap();
        let aaa = mission.vehicle_group_platoon("Sukhumi AAA #0", &[FUEL_TRUCK_ATZ_10], Point::new(0.0, 0.0), 0.0);
        mission.add_group("Abkhazia", aaa).unwrap();

        let rows = collect_stats(&mission);
        assert_eq!(
            rows,
            vec![StatsRow {
                side: "red",
                country: "Abkhazia".to_string(),
                kind: GroupKind::Vehicle,
                groups: 2,
                units: 6,
            }]
        );
    }

    /// ヘッダー・各行・合計行からなる
    #[test]
    fn test_create_stats_table() {
        let rows = vec![
            StatsRow { side: "red", country: "Abkhazia".to_string(), kind: GroupKind::Vehicle, groups: 3, units: 9 },
            StatsRow { side: "blue", country: "USA".to_string(), kind: GroupKind::Plane, groups: 1, units: 1 },
        ];
        let table = create_stats_table(&rows);
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("side"));
        assert!(lines[1].contains("Abkhazia") && lines[1].contains("vehicle"));
        assert!(lines[3].starts_with("total"));
        assert!(lines[3].trim_end().ends_with("10"));
    }
}
