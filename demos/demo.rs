use twpca::{AddressParser, ParseOptions, ParseRecord};

fn main() {
    let parser = AddressParser::new().with_options(ParseOptions::new().position_sensitive(true));

    println!("=== TWPCA 地址解析示範 ===\n");

    let test_cases = vec![
        // 完整地址
        "臺北市中正區重慶南路一段122號",
        "新北市板橋區文化路一段188號",
        "新竹縣竹北市光明六路",
        // 簡稱
        "高雄鳳山區光遠路",
        "臺灣新竹縣竹北市",
        "福建金門縣金城鎮民生路",
        // 只有區，依唯一性回填
        "板橋區文化路一段",
        // 同名區，無法判定
        "信義區松仁路100號",
        "臺灣省信義區信二路",
        // 路名不誤判
        "臺中路100號",
        // 無法識別
        "某某路123號",
        "",
    ];

    println!("{}", ParseRecord::columns(true).join("\t"));
    for addr in test_cases {
        let result = parser.parse(addr);
        println!("{}\t<- \"{}\"", result.to_row().join("\t"), addr);
    }
}
