use choropleth::{
    Choropleth, ChoroplethError, Color, ColorScale, Domain, Fill, Geocoder, LatLon, LocateError,
    LocatedRegion, PointTable, RecordStore, RegionFeature, SelectionSession, SelectionState,
    TimeWindow, Year, YearMonth,
};
use chrono::NaiveDate;
use std::future::{ready, Future};

const RECORDS: &str = r#"[
    {"time": "2020-01-15T00:00:00Z", "country_id": "FR", "country_name": "France",
     "country_code": "FR", "value": 10.0, "measurement": "Average_Temperature"},
    {"time": "2020-06-15T00:00:00Z", "country_id": "FR", "country_name": "France",
     "country_code": "FR", "value": 20.0, "measurement": "Average_Temperature"},
    {"time": "2020-06-15T00:00:00Z", "country_id": "FR", "country_name": "France",
     "country_code": "FR", "value": 28.0, "measurement": "Maximum_Temperature"},
    {"time": "2020-03-15T00:00:00Z", "country_id": "GM", "country_name": "Germany",
     "country_code": "DE", "value": 0.0, "measurement": "Average_Temperature"},
    {"time": "2019-03-15T00:00:00Z", "country_id": "NO", "country_name": "Norway",
     "country_code": "NO", "value": -3.0, "measurement": "Average_Temperature"}
]"#;

struct FixedGeocoder(Option<LocatedRegion>);

impl Geocoder for FixedGeocoder {
    fn locate(
        &self,
        location: LatLon,
    ) -> impl Future<Output = Result<LocatedRegion, LocateError>> + Send {
        ready(self.0.clone().ok_or(LocateError::NoMatch {
            lat: location.0,
            lon: location.1,
        }))
    }
}

fn averages() -> RecordStore {
    RecordStore::from_json_slice(RECORDS.as_bytes())
        .unwrap()
        .only_measurement("Average_Temperature")
}

#[test]
fn france_example_maps_to_mid_color() -> Result<(), ChoroplethError> {
    let engine = Choropleth::new();
    let index = engine
        .summarize()
        .records(&averages())
        .window(TimeWindow::spanning(Year(2020), Year(2020)).unwrap())
        .call()?;

    let feature = RegionFeature::builder().id("FR").code("FR").name("France").build();
    let france = engine.resolver().resolve(&index, &feature).unwrap();
    assert_eq!(france.count, 2);
    assert_eq!(france.total, 30.0);
    assert_eq!(france.average(), Some(15.0));

    let domain = Domain::new(0.0, 30.0)?;
    let scale = ColorScale::default();
    assert_eq!(scale.color_for(15.0, &domain), scale.stops().mid);
    assert_eq!(
        engine.fill_for(&index, &feature, &domain),
        Fill::Color(Color::new(0x73, 0xff, 0x00))
    );
    Ok(())
}

#[test]
fn domain_and_legend_follow_the_data() -> Result<(), ChoroplethError> {
    let engine = Choropleth::new();
    let index = engine
        .summarize()
        .records(&averages())
        .window(TimeWindow::new(
            YearMonth::new(2019, 1).unwrap(),
            YearMonth::new(2020, 12).unwrap(),
        ))
        .call()?;

    let domain = index.domain().unwrap();
    assert_eq!((domain.min(), domain.max()), (-3.0, 15.0));

    let legend = engine.legend(&domain)?;
    let values: Vec<f64> = legend.iter().map(|entry| entry.value).collect();
    assert_eq!(values, vec![20.0, 10.0, 0.0, -10.0]);

    let features = [
        RegionFeature::builder().code("DE").build(),
        RegionFeature::builder().code("-99").name("Atlantis").build(),
        RegionFeature::builder().name("Norway").build(),
    ];
    let fills = engine.fills(&index, &features, &domain);
    assert!(matches!(fills[0], Fill::Color(_)));
    assert_eq!(fills[1], Fill::NoData);
    assert_eq!(fills[2], Fill::Color(engine.scale().stops().low));
    Ok(())
}

#[test]
fn point_mode_and_table_agree() -> Result<(), ChoroplethError> {
    let engine = Choropleth::new();
    let store = RecordStore::from_json_slice(RECORDS.as_bytes())?;
    let june = NaiveDate::from_ymd_opt(2020, 6, 15).unwrap();

    let direct = engine.summarize().records(&store).date(june).call()?;
    let table = PointTable::build(&store);
    assert_eq!(direct, table.at(june));

    // both measurements share the date; the later record wins
    let feature = RegionFeature::builder().id("FR").build();
    let france = engine.resolver().resolve(&direct, &feature).unwrap();
    assert_eq!(france.total, 28.0);
    assert_eq!(france.count, 1);
    Ok(())
}

#[tokio::test]
async fn clicking_the_map_drives_the_session() -> Result<(), ChoroplethError> {
    let engine = Choropleth::new();
    let index = engine
        .summarize()
        .records(&averages())
        .window(TimeWindow::spanning(Year(2020), Year(2020)).unwrap())
        .call()?;
    let mut session = SelectionSession::new();

    let nowhere = FixedGeocoder(None);
    engine
        .select(&mut session, &nowhere, LatLon(0.0, -30.0), &index)
        .await;
    assert_eq!(session.state(), &SelectionState::Idle);

    let france = FixedGeocoder(Some(LocatedRegion::new("fr", "France")));
    engine
        .select(&mut session, &france, LatLon(48.85, 2.35), &index)
        .await;
    let selected = session.selected().unwrap();
    assert_eq!(selected.average(), Some(15.0));
    assert_eq!(selected.data_points(), 2);

    let norway = FixedGeocoder(Some(LocatedRegion::new("NO", "Norway")));
    engine
        .select(&mut session, &norway, LatLon(60.0, 10.0), &index)
        .await;
    let selected = session.selected().unwrap();
    assert_eq!(selected.name, "Norway");
    assert!(!selected.has_data());

    engine
        .select(&mut session, &nowhere, LatLon(0.0, -30.0), &index)
        .await;
    assert_eq!(session.selected().map(|s| s.code.as_str()), Some("NO"));

    session.close();
    assert!(!session.is_open());
    Ok(())
}
