use super::*;

/// 从生成结果中取出数组体内的所有字节行
fn chunk_lines(header: &str) -> Vec<&str> {
    header
        .lines()
        .skip_while(|l| !l.trim_end().ends_with("[] = {"))
        .skip(1)
        .take_while(|l| *l != "    };")
        .collect()
}

/// 按顺序解码所有 `0x..` 字面量
fn decode(header: &str) -> Vec<u8> {
    chunk_lines(header)
        .iter()
        .flat_map(|line| line.split(','))
        .map(str::trim)
        .filter(|tok| !tok.is_empty())
        .map(|tok| u8::from_str_radix(tok.trim_start_matches("0x"), 16).unwrap())
        .collect()
}

/// 确定性的伪随机字节序列
fn pseudo_random(len: usize, seed: u32) -> Vec<u8> {
    let mut state = seed;
    (0..len)
        .map(|_| {
            state = state.wrapping_mul(1_103_515_245).wrapping_add(12_345);
            (state >> 16) as u8
        })
        .collect()
}

fn render(source: &[u8], path: &str, id: &str) -> String {
    generate(source, path, id, &HeaderTemplate::default())
}

#[test]
fn full_layout_is_exact() {
    let out = render(&[0x00, 0x01, 0x02], "assets/logo.bin", "foo");
    let expected = "// GENERATED FROM assets/logo.bin\n\
                    #pragma once\n\
                    \n\
                    #include <cstdint>\n\
                    \n\
                    namespace\n\
                    {\n\
                    \x20   const std::uint8_t foo[] = {\n\
                    \x20       0x00, 0x01, 0x02,\n\
                    \x20   };\n\
                    } /* namespace */\n";
    assert_eq!(out, expected);
}

#[test]
fn scenario_small_input() {
    let out = render(&[0x00, 0x01, 0x02], "in.bin", "foo");
    let lines: Vec<&str> = out.lines().collect();
    let decl = lines
        .iter()
        .position(|l| *l == "    const std::uint8_t foo[] = {")
        .unwrap();
    assert_eq!(lines[decl + 1], "        0x00, 0x01, 0x02,");
    assert_eq!(lines[decl + 2], "    };");
}

#[test]
fn scenario_empty_input() {
    let out = render(&[], "empty.bin", "empty");
    assert!(out.contains("    const std::uint8_t empty[] = {\n    };\n"));
    assert!(chunk_lines(&out).is_empty());
    assert!(decode(&out).is_empty());
}

#[test]
fn scenario_thirteen_bytes() {
    let source: Vec<u8> = (0u8..13).collect();
    let out = render(&source, "x", "thirteen");
    let lines = chunk_lines(&out);
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0].matches("0x").count(), 12);
    assert_eq!(lines[1], "        0x0c,");
}

#[test]
fn round_trip_various_lengths() {
    for len in [0, 1, 11, 12, 13, 24, 25, 255, 256, 1000] {
        let source = pseudo_random(len, len as u32 + 7);
        let out = render(&source, "data.bin", "blob");
        assert_eq!(decode(&out), source, "len = {len}");
    }
}

#[test]
fn round_trip_all_byte_values() {
    let source: Vec<u8> = (0..=255).collect();
    assert_eq!(decode(&render(&source, "all.bin", "all")), source);
}

#[test]
fn chunk_count_and_last_line_length() {
    for len in [1usize, 5, 12, 13, 23, 24, 36, 37, 100] {
        let out = render(&pseudo_random(len, 1), "f", "id");
        let lines = chunk_lines(&out);
        assert_eq!(lines.len(), len.div_ceil(12), "len = {len}");
        assert_eq!(lines.len(), chunk_count(len, &HeaderTemplate::default()));

        let expected_last = if len % 12 == 0 { 12 } else { len % 12 };
        let last = lines.last().unwrap();
        assert_eq!(last.matches("0x").count(), expected_last, "len = {len}");
        for full in &lines[..lines.len() - 1] {
            assert_eq!(full.matches("0x").count(), 12);
        }
    }
}

#[test]
fn literals_are_lowercase_and_padded() {
    let out = render(&[0x0a, 0xab, 0xff, 0x00], "f", "id");
    assert!(out.contains("        0x0a, 0xab, 0xff, 0x00,\n"));
    assert!(!chunk_lines(&out).iter().any(|l| l.contains("0xA") || l.contains("0xF")));
}

#[test]
fn identifier_and_path_are_verbatim() {
    let path = "../weird dir/\u{4e2d}文 \"q\".bin";
    let id = "not-a-valid identifier!";
    let out = render(&[1], path, id);
    assert_eq!(out.lines().next().unwrap(), format!("// GENERATED FROM {path}"));
    assert!(out.contains(&format!("    const std::uint8_t {id}[] = {{\n")));
}

#[test]
fn output_is_deterministic() {
    let source = pseudo_random(500, 42);
    assert_eq!(render(&source, "p", "i"), render(&source, "p", "i"));
}

#[test]
fn writer_matches_string_output() {
    let template = HeaderTemplate::default();
    for len in [0, 12, 29] {
        let source = pseudo_random(len, 3);
        let mut buf = Vec::new();
        write_header(&mut buf, &source, "w.bin", "w", &template).unwrap();
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            generate(&source, "w.bin", "w", &template)
        );
    }
}

#[test]
fn custom_chunk_size_is_honoured() {
    let template = HeaderTemplate {
        chunk_size: 4,
        ..HeaderTemplate::default()
    };
    let out = generate(&pseudo_random(10, 9), "f", "id", &template);
    let lines = chunk_lines(&out);
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[2].matches("0x").count(), 2);
}

#[test]
fn footer_closes_scope() {
    assert_eq!(
        render_footer(&HeaderTemplate::default()),
        "    };\n} /* namespace */\n"
    );
}
