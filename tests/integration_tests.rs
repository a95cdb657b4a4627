//! Integration tests for Typokit punctuation conversion and table generation

use typokit::{
    generate_table, generate_table_from_code, generate_table_with_options, glyphs::GLYPH_MAP,
    parse_merge_list, parse_merge_region, translate, AlignMode, ConversionError, MergeInput,
    MergeRegion, TableOptions, TableSpec,
};

fn region(r1: usize, c1: usize, r2: usize, c2: usize) -> MergeRegion {
    MergeRegion::from_corners((r1, c1), (r2, c2))
}

/// `<td>` count per `<tr>`
fn cells_per_row(html: &str) -> Vec<usize> {
    html.split("<tr>")
        .skip(1)
        .map(|row| row.split("</tr>").next().unwrap_or("").matches("<td").count())
        .collect()
}

// ============================================================================
// Punctuation Conversion
// ============================================================================

mod punct {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_documented_sample() {
        let input = "他说：“早（啊）。”\n她说，“吃了吗您内！？”\n";
        let expected = "他说: \"早(啊). \"\n她说, \"吃了吗您内! ? \"\n";
        assert_eq!(translate(input), expected);
    }

    #[test]
    fn test_sample_positions() {
        let result = translate("他说：“早（啊）。”");
        let colon = result.find(": \"").unwrap();
        let open = result.find('(').unwrap();
        let word = result.find('啊').unwrap();
        let close = result.find(')').unwrap();
        let stop = result.find(". ").unwrap();
        assert!(colon < open && open < word && word < close && close < stop);
        assert!(result.ends_with(". \""));
    }

    #[test]
    fn test_mapping_totality() {
        for (src, dst) in GLYPH_MAP.entries() {
            for input in [
                src.to_string(),
                format!("abc{}", src),
                format!("{}xyz", src),
                format!("中{}{}文", src, src),
            ] {
                let expected = input.replace(*src, dst);
                assert_eq!(translate(&input), expected);
            }
        }
    }

    #[test]
    fn test_untouched_characters() {
        let input = "ASCII .,;:\"'?!() 全角字母ＡＢＣ 「括号」 《书名》 、 emoji 🎉 \r\n";
        assert_eq!(translate(input), input);
    }

    #[test]
    fn test_markdown_document() {
        let input = "# 标题\n\n- 列表项：内容。\n- **加粗**（注释）\n";
        let expected = "# 标题\n\n- 列表项: 内容. \n- **加粗**(注释)\n";
        assert_eq!(translate(input), expected);
    }
}

// ============================================================================
// Table Generation
// ============================================================================

mod table {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_trivial_grid() {
        let html = generate_table(2, 2, AlignMode::Center, &[]).unwrap();
        assert!(html.starts_with("<table style=\"text-align:center;\">"));
        assert!(html.ends_with("</table>"));
        assert_eq!(cells_per_row(&html), vec![2, 2]);
        assert_eq!(html.matches("<td></td>").count(), 4);
    }

    #[test]
    fn test_single_merge() {
        let html = generate_table(2, 2, AlignMode::Left, &[region(1, 1, 1, 2)]).unwrap();
        assert!(html.contains("text-align:left;"));
        assert_eq!(cells_per_row(&html), vec![1, 2]);
        let first_row = html.split("</tr>").next().unwrap();
        assert!(first_row.contains("<td colspan=\"2\"></td>"));
    }

    #[test]
    fn test_full_example() {
        let merges = [region(1, 1, 2, 1), region(1, 2, 1, 3), region(3, 2, 4, 3)];
        let html = generate_table(4, 3, AlignMode::Center, &merges).unwrap();
        let rows: Vec<&str> = html.split("</tr>").collect();

        assert_eq!(cells_per_row(&html), vec![2, 2, 2, 1]);
        assert!(rows[0].contains("<td rowspan=\"2\"></td>"));
        assert!(rows[0].contains("<td colspan=\"2\"></td>"));
        assert!(!rows[1].contains("span"));
        assert!(rows[2].contains("<td colspan=\"2\" rowspan=\"2\"></td>"));
        assert!(!rows[3].contains("span"));
    }

    #[test]
    fn test_from_literals() {
        let merges = parse_merge_list("[[(1,1),(2,1)],[(1,2),(1,3)],[(3,2),(4,3)]]").unwrap();
        let from_literals = generate_table_from_code(4, 3, 2, &merges).unwrap();
        let typed = generate_table(
            4,
            3,
            AlignMode::Center,
            &[region(1, 1, 2, 1), region(1, 2, 1, 3), region(3, 2, 4, 3)],
        )
        .unwrap();
        assert_eq!(from_literals, typed);
    }

    #[test]
    fn test_prompt_style_input() {
        let answers = ["[(1,2),(2,3)]", " [(3, 1), (3, 3)] ", "-1", "[(9,9),(9,9)]"];
        let mut merges = Vec::new();
        for answer in answers {
            match parse_merge_region(answer).unwrap() {
                MergeInput::Region(r) => merges.push(r),
                MergeInput::End => break,
            }
        }
        assert_eq!(merges.len(), 2);

        let html = generate_table(3, 3, AlignMode::Right, &merges).unwrap();
        assert_eq!(cells_per_row(&html), vec![2, 1, 1]);
    }

    #[test]
    fn test_compact_matches_default_content() {
        let spec = TableSpec::new(3, 2, AlignMode::Left).merge(region(2, 1, 3, 2));
        let pretty = spec.generate(&TableOptions::default()).unwrap();
        let compact = spec.generate(&TableOptions::compact()).unwrap();
        let stripped: String = pretty.lines().map(str::trim).collect();
        assert_eq!(stripped, compact);
    }

    #[test]
    fn test_large_grid() {
        let merges: Vec<MergeRegion> = (0..10)
            .map(|i| region(i * 2 + 1, 1, i * 2 + 2, 20))
            .collect();
        let html = generate_table_with_options(
            20,
            20,
            AlignMode::Center,
            &merges,
            &TableOptions::compact(),
        )
        .unwrap();
        assert_eq!(cells_per_row(&html), [1usize, 0].repeat(10));
        assert_eq!(html.matches("colspan=\"20\" rowspan=\"2\"").count(), 10);
    }
}

// ============================================================================
// Error Handling
// ============================================================================

mod errors {
    use super::*;

    fn assert_invalid(result: Result<String, ConversionError>) {
        match result {
            Err(ConversionError::InvalidInput { .. }) => {}
            other => panic!("expected InvalidInput, got {:?}", other),
        }
    }

    #[test]
    fn test_degenerate_region() {
        assert_invalid(generate_table(2, 2, AlignMode::Center, &[region(1, 1, 1, 1)]));
    }

    #[test]
    fn test_inverted_region() {
        assert_invalid(generate_table(2, 2, AlignMode::Center, &[region(2, 2, 1, 1)]));
    }

    #[test]
    fn test_out_of_bounds() {
        assert_invalid(generate_table(2, 2, AlignMode::Center, &[region(2, 2, 3, 3)]));
    }

    #[test]
    fn test_overlapping_regions() {
        assert_invalid(generate_table(
            4,
            4,
            AlignMode::Center,
            &[region(1, 1, 3, 3), region(3, 3, 4, 4)],
        ));
    }

    #[test]
    fn test_bad_alignment_code() {
        assert_invalid(generate_table_from_code(2, 2, 0, &[]));
        assert_invalid(generate_table_from_code(2, 2, 4, &[]));
    }

    #[test]
    fn test_error_before_output() {
        // A valid region followed by an invalid one still yields no markup
        let result = generate_table(
            3,
            3,
            AlignMode::Center,
            &[region(1, 1, 1, 2), region(3, 3, 3, 3)],
        );
        assert_invalid(result);
    }

    #[test]
    fn test_literal_is_not_evaluated() {
        assert!(parse_merge_region("[(1+1,1),(2,2)]").is_err());
        assert!(parse_merge_list("[[(1,1),(2,1)]] ; rm -rf /").is_err());
    }
}
