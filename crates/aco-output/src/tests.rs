//! Unit tests for aco-output.

#[cfg(test)]
mod helpers {
    use aco_colony::CycleRecord;
    use aco_core::{NodeId, SimTime};
    use aco_sim::Observation;

    pub fn cycle(ids: &[u32], weight: u64) -> CycleRecord {
        CycleRecord { nodes: ids.iter().copied().map(NodeId).collect(), weight }
    }

    pub fn observation(seq: u32, candidates: Vec<CycleRecord>, best: Option<CycleRecord>) -> Observation {
        Observation {
            seq,
            time:               SimTime(2.5 * seq as f64),
            move_events:        40,
            evaporation_events: 7,
            candidates,
            best,
        }
    }
}

// ── Text report ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod report {
    use aco_core::{NodeId, SimParams};
    use aco_graph::GraphBuilder;
    use aco_sim::SimObserver;

    use super::helpers::{cycle, observation};
    use crate::{TextReport, write_input, write_observation};

    fn render(obs: &aco_sim::Observation) -> String {
        let mut buf = Vec::new();
        write_observation(&mut buf, obs).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn empty_observation_prints_empty_set() {
        let text = render(&observation(1, vec![], None));
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "Observation 1:");
        assert!(lines[1].contains("Present instant:") && lines[1].ends_with("2.5"));
        assert!(lines[2].ends_with("40"));
        assert!(lines[3].ends_with("7"));
        assert_eq!(lines[4].trim(), "Top candidate cycles:");
        assert!(lines[5].starts_with("\tBest Hamiltonian cycle:"));
        assert!(lines[5].ends_with("{}"));
        assert_eq!(lines[6], "");
        assert_eq!(lines.len(), 7);
    }

    #[test]
    fn candidates_are_listed_one_per_line() {
        let obs = observation(
            3,
            vec![cycle(&[1, 4, 3, 2], 11), cycle(&[1, 2, 4, 3], 14)],
            Some(cycle(&[1, 2, 3, 4], 10)),
        );
        let text = render(&obs);
        let lines: Vec<&str> = text.lines().collect();
        assert!(lines[4].ends_with("{1,4,3,2}:11"));
        assert_eq!(lines[5].trim(), "{1,2,4,3}:14");
        assert!(lines[6].ends_with("{1,2,3,4}:10"));

        // The value column lines up.
        let col = lines[4].find('{').unwrap();
        assert_eq!(lines[5].find('{'), Some(col));
        assert_eq!(lines[6].find('{'), Some(col));
    }

    #[test]
    fn input_echo_lists_params_and_matrix() {
        let mut b = GraphBuilder::new(3);
        b.add_edge(NodeId(1), NodeId(2), 4).unwrap();
        b.add_edge(NodeId(2), NodeId(3), 5).unwrap();
        b.add_edge(NodeId(3), NodeId(1), 6).unwrap();
        let graph = b.build();
        let params = SimParams {
            nest:         NodeId(2),
            alpha:        1.0,
            beta:         3.5,
            delta:        0.2,
            eta:          2.0,
            rho:          10.0,
            gamma:        0.5,
            colony_size:  200,
            horizon:      300.0,
            seed:         0,
            observations: 20,
        };

        let mut buf = Vec::new();
        write_input(&mut buf, &params, &graph).unwrap();
        let text = String::from_utf8(buf).unwrap();

        assert!(text.starts_with("Input parameters:\n"));
        assert!(text.contains("3 : number of nodes in the graph"));
        assert!(text.contains("2 : the nest node"));
        assert!(text.contains("3.5 : beta, ant move event"));
        assert!(text.contains("200 : ant colony size"));
        assert!(text.contains("300 : final instant"));
        assert!(text.contains("\t\t0 4 6\n\t\t4 0 5\n\t\t6 5 0\n"));
    }

    #[test]
    fn text_report_observer_writes_blocks() {
        let mut report = TextReport::new(Vec::new());
        report.on_observation(&observation(1, vec![], None));
        report.on_observation(&observation(2, vec![], Some(cycle(&[1, 2, 3], 9))));
        assert!(report.take_error().is_none());

        let text = String::from_utf8(report.into_inner()).unwrap();
        assert_eq!(text.matches("Observation ").count(), 2);
        assert!(text.contains("{1,2,3}:9"));
    }
}

// ── CSV ───────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod csv_tests {
    use tempfile::TempDir;

    use super::helpers::{cycle, observation};
    use crate::csv::CsvWriter;
    use crate::row::{CycleRow, ObservationRow};
    use crate::writer::OutputWriter;

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    #[test]
    fn csv_files_created_in_nested_dir() {
        let dir = tmp();
        let out = dir.path().join("run").join("a");
        let _w = CsvWriter::new(&out).unwrap();
        assert!(out.join("observations.csv").exists());
        assert!(out.join("cycles.csv").exists());
    }

    #[test]
    fn csv_headers_correct() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("observations.csv")).unwrap();
        let headers: Vec<_> = rdr.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(
            headers,
            ["seq", "time", "move_events", "evaporation_events", "candidates", "best_weight", "best_cycle"]
        );

        let mut rdr2 = csv::Reader::from_path(dir.path().join("cycles.csv")).unwrap();
        let headers2: Vec<_> = rdr2.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(headers2, ["rank", "weight", "nodes"]);
    }

    #[test]
    fn observation_rows() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        let before = observation(1, vec![], None);
        let after = observation(2, vec![cycle(&[1, 3, 2], 12)], Some(cycle(&[1, 2, 3], 9)));
        w.write_observation(&ObservationRow::from(&before)).unwrap();
        w.write_observation(&ObservationRow::from(&after)).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("observations.csv")).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(&rows[0][1], "2.5");
        assert_eq!(&rows[0][5], "");    // no best yet
        assert_eq!(&rows[1][4], "1");   // one candidate
        assert_eq!(&rows[1][5], "9");
        assert_eq!(&rows[1][6], "1 2 3");
    }

    #[test]
    fn cycle_rows() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        let rows = [CycleRow::new(1, &cycle(&[1, 2, 3], 9)), CycleRow::new(2, &cycle(&[1, 3, 2], 12))];
        w.write_cycles(&rows).unwrap();
        w.finish().unwrap();
        w.finish().unwrap(); // idempotent

        let mut rdr = csv::Reader::from_path(dir.path().join("cycles.csv")).unwrap();
        let read: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(read.len(), 2);
        assert_eq!(&read[1][0], "2");
        assert_eq!(&read[1][2], "1 3 2");
    }
}

// ── Observer bridge ───────────────────────────────────────────────────────────

#[cfg(test)]
mod observer_tests {
    use aco_core::{NodeId, SimParams};
    use aco_graph::GraphBuilder;
    use aco_sim::SimBuilder;

    use crate::{CsvWriter, SimOutputObserver, TextReport};

    #[test]
    fn full_run_writes_both_csv_files() {
        let dir = tempfile::tempdir().unwrap();

        let mut b = GraphBuilder::new(4);
        b.add_edge(NodeId(1), NodeId(2), 3).unwrap();
        b.add_edge(NodeId(2), NodeId(3), 2).unwrap();
        b.add_edge(NodeId(3), NodeId(4), 4).unwrap();
        b.add_edge(NodeId(4), NodeId(1), 1).unwrap();
        b.add_edge(NodeId(1), NodeId(3), 5).unwrap();
        let params = SimParams {
            nest:         NodeId(1),
            alpha:        1.0,
            beta:         1.0,
            delta:        0.2,
            eta:          2.0,
            rho:          0.5,
            gamma:        1.0,
            colony_size:  4,
            horizon:      40.0,
            seed:         77,
            observations: 10,
        };
        let mut sim = SimBuilder::new(params, b.build()).build().unwrap();

        let export = SimOutputObserver::new(CsvWriter::new(dir.path()).unwrap());
        let mut observer = (TextReport::new(Vec::new()), export);
        sim.run(&mut observer).unwrap();
        let (mut text, mut export) = observer;
        assert!(export.take_error().is_none());
        assert!(text.take_error().is_none());

        let mut rdr = csv::Reader::from_path(dir.path().join("observations.csv")).unwrap();
        assert_eq!(rdr.records().count(), 10);

        let mut rdr = csv::Reader::from_path(dir.path().join("cycles.csv")).unwrap();
        let cycles: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(cycles.len(), sim.colony.trails().cycles().len());
        assert_eq!(&cycles[0][1], sim.colony.best().unwrap().weight.to_string());

        let report = String::from_utf8(text.into_inner()).unwrap();
        assert!(report.contains("Observation 10:"));
    }
}
